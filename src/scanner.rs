// SPDX-License-Identifier: PMPL-1.0-or-later
//! Entry points that run the full pipeline on documents.
//!
//! `collect -> audit -> summary`, on a single parsed document, a file,
//! or every HTML file under a directory.

use crate::collector::collect;
use crate::config::ScanConfig;
use crate::error::{InspectorError, Result};
use crate::score::{audit, AuditSummary};
use scraper::Html;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Audit summary for one document found during a directory scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAudit {
    pub path: PathBuf,
    #[serde(flatten)]
    pub summary: AuditSummary,
}

/// Audit an already parsed document
pub fn inspect(document: &Html) -> AuditSummary {
    let snapshot = collect(document);
    audit(&snapshot).summary()
}

/// Parse and audit HTML source
pub fn inspect_html(content: &str) -> AuditSummary {
    inspect(&Html::parse_document(content))
}

/// Audit a single file
pub fn scan_file(path: &Path) -> Result<AuditSummary> {
    let content = std::fs::read_to_string(path).map_err(|e| InspectorError::read(path, e))?;
    info!("Auditing {}", path.display());
    Ok(inspect_html(&content))
}

/// Audit every scannable file under `dir`, in path order
pub fn scan_directory(dir: &Path, scan: &ScanConfig) -> Result<Vec<DocumentAudit>> {
    // An unreadable root stops the run; unreadable entries below it are skipped
    std::fs::read_dir(dir).map_err(|e| InspectorError::read(dir, e))?;

    let mut audits = Vec::new();

    info!("Scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_str().unwrap_or("");
            !scan.skips_dir(name)
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() || !scan.is_scannable(entry.path()) {
            continue;
        }

        let path = entry.path();
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        audits.push(DocumentAudit {
            path: path.to_path_buf(),
            summary: inspect_html(&content),
        });
    }

    info!("Audited {} document(s)", audits.len());

    Ok(audits)
}
