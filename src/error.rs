// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for aria-tree-inspector

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InspectorError>;

/// Main error type for aria-tree-inspector
#[derive(Error, Debug)]
pub enum InspectorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InspectorError {
    /// Wrap an IO error with the path that produced it
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InspectorError::Read {
            path: path.into(),
            source,
        }
    }
}
