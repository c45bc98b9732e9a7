// SPDX-License-Identifier: PMPL-1.0-or-later
//! Aria Tree Inspector CLI

use anyhow::Context;
use aria_tree_inspector::config::{self, Config};
use aria_tree_inspector::report::{generate_directory_report, generate_report, OutputFormat};
use aria_tree_inspector::scanner;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Audit HTML documents for missing accessible names
#[derive(Parser)]
#[command(name = "aria-tree-inspector")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a single document (`-` reads from stdin)
    Audit {
        /// HTML file to audit
        file: PathBuf,

        /// Output format
        #[arg(long)]
        format: Option<FormatArg>,

        /// Output file (JSON goes to stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Audit every HTML document under a directory
    Check {
        /// Directory to scan
        dir: PathBuf,

        /// Output format
        #[arg(long)]
        format: Option<FormatArg>,

        /// Output file (JSON goes to stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Write a default configuration file
    Init {
        /// Where to write the configuration
        #[arg(default_value = ".aria-inspector.toml")]
        path: PathBuf,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Console report on stderr
    Text,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: bool, config: &Config) {
    let filter = if verbose {
        EnvFilter::new("aria_tree_inspector=debug")
    } else {
        EnvFilter::new(format!("aria_tree_inspector={}", config.log.level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let config = config::load_config(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    init_logging(cli.verbose, &config);

    match cli.command {
        Commands::Audit { file, format, output } => {
            let summary = if file == Path::new("-") {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .context("reading document from stdin")?;
                scanner::inspect_html(&content)
            } else {
                scanner::scan_file(&file)?
            };
            let format = format.map(OutputFormat::from).unwrap_or(config.output.format);
            let report = generate_report(&summary, format)?;
            write_output(&report, format, output.as_deref())?;
        }

        Commands::Check { dir, format, output } => {
            let audits = scanner::scan_directory(&dir, &config.scan)?;
            let format = format.map(OutputFormat::from).unwrap_or(config.output.format);
            let report = generate_directory_report(&audits, format)?;
            write_output(&report, format, output.as_deref())?;
        }

        Commands::Init { path } => {
            config::write_default_config(&path)?;
            eprintln!("Configuration written to {}", path.display());
        }
    }

    Ok(())
}

/// Write a report to a file, or to its default stream: text goes to stderr, JSON to stdout
fn write_output(content: &str, format: OutputFormat, path: Option<&Path>) -> anyhow::Result<()> {
    match (path, format) {
        (Some(p), _) => {
            std::fs::write(p, content).with_context(|| format!("writing {}", p.display()))?;
            eprintln!("Report written to {}", p.display());
        }
        (None, OutputFormat::Text) => eprint!("{}", content),
        (None, OutputFormat::Json) => println!("{}", content),
    }
    Ok(())
}
