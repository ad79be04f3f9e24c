//! Error handling for STEP header extraction.
//!
//! Provides error types with context for file access, record decoding,
//! and unit mapping failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StepError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Required record {record} not found in file: {path}")]
    MissingRecord { record: &'static str, path: PathBuf },

    #[error("Malformed {record} record: {reason} in '{text}'")]
    MalformedRecord {
        record: &'static str,
        text: String,
        reason: String,
    },

    #[error("Unsupported unit: prefix '{prefix}', unit '{unit}'")]
    UnsupportedUnit { prefix: String, unit: String },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StepError {
    /// Create an I/O error carrying the offending path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed-record error naming the record and offending text
    pub fn malformed(
        record: &'static str,
        text: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            record,
            text: text.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StepError>;
