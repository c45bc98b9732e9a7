// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for audit results.
//!
//! Supports two output formats:
//! - Text: the fixed console banner with score, grade, and failing tags
//! - JSON: structured summaries for programmatic consumption

use crate::error::Result;
use crate::scanner::DocumentAudit;
use crate::score::AuditSummary;
use serde::{Deserialize, Serialize};

const RULE: &str = "################################################################";

const HOMEPAGE: &str = "https://github.com/DR8off";

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Render the console report for one document
pub fn render_text(summary: &AuditSummary) -> String {
    let missing = if summary.failure_count > 0 {
        format!("Missing attributes at: {}", summary.failing_tags().join(","))
    } else {
        String::new()
    };

    let mut output = String::new();
    output.push_str(RULE);
    output.push_str("\n\n");
    output.push_str(&format!(
        "Aria Tree Inspector {} | GitHub - {}\n\n",
        env!("CARGO_PKG_VERSION"),
        HOMEPAGE
    ));
    output.push_str(&format!("Total score - {}%\n", summary.score));
    output.push_str(&format!("{}\n\n", summary.grade));
    output.push_str(&format!("Total elements checked: {}\n", summary.total));
    output.push_str(&format!(
        "Elements with missing attributes: {}\n\n",
        summary.failure_count
    ));
    output.push_str(&missing);
    output.push_str("\n\n");
    output.push_str(RULE);
    output.push('\n');
    output
}

/// Generate a report for a single document
pub fn generate_report(summary: &AuditSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(summary)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}

/// Generate a report covering every document found by a directory scan
pub fn generate_directory_report(audits: &[DocumentAudit], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            if audits.is_empty() {
                return Ok("No HTML documents found.\n".to_string());
            }
            let blocks: Vec<String> = audits
                .iter()
                .map(|a| format!("{}\n{}", a.path.display(), render_text(&a.summary)))
                .collect();
            Ok(blocks.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(audits)?),
    }
}
