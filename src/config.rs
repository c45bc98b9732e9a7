// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration handling for aria-tree-inspector.
//!
//! Configuration covers how documents are found and how results are
//! reported. The rule set itself is fixed and cannot be configured.

use crate::error::{InspectorError, Result};
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanning settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Directory scanning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File extensions treated as HTML documents
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names never descended into
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            skip_dirs: default_skip_dirs(),
        }
    }
}

impl ScanConfig {
    /// Whether `path` has one of the configured extensions
    pub fn is_scannable(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }

    /// Whether a directory with this name should be skipped
    pub fn skips_dir(&self, name: &str) -> bool {
        name.starts_with('.') || self.skip_dirs.iter().any(|d| d == name)
    }
}

fn default_extensions() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string(), "xhtml".to_string()]
}

fn default_skip_dirs() -> Vec<String> {
    vec![
        "node_modules".to_string(),
        "target".to_string(),
        "vendor".to_string(),
        "coverage".to_string(),
    ]
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Report output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

/// Load configuration from a path, falling back to defaults when it does not exist
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("Config file not found at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| InspectorError::read(path, e))?;
    let config: Config = toml::from_str(&content)?;

    debug!(?config, "Loaded configuration");
    Ok(config)
}

/// Default config file, looked up in the working directory
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".aria-inspector.toml")
}

/// Write the default configuration to a file
pub fn write_default_config(path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&Config::default())
        .map_err(|e| InspectorError::Config(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.scan.extensions.contains(&"html".to_string()));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.log, LogConfig::default());
        assert_eq!(config.scan, ScanConfig::default());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[output]\nformat = \"xml\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_scannable_extensions() {
        let scan = ScanConfig::default();
        assert!(scan.is_scannable(Path::new("site/index.html")));
        assert!(scan.is_scannable(Path::new("site/INDEX.HTM")));
        assert!(!scan.is_scannable(Path::new("site/app.css")));
        assert!(!scan.is_scannable(Path::new("Makefile")));
    }

    #[test]
    fn test_skipped_dirs() {
        let scan = ScanConfig::default();
        assert!(scan.skips_dir("node_modules"));
        assert!(scan.skips_dir(".git"));
        assert!(!scan.skips_dir("public"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/.aria-inspector.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_config_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/.aria-inspector.toml");
        write_default_config(&path).unwrap();
        assert_eq!(load_config(&path).unwrap(), Config::default());
    }
}
