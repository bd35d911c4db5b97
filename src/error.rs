//! Error types for README conversion

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Error types for reading, converting and writing a document
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source document missing or unreadable
    #[error("Failed to read source document {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output could not be written or moved into place
    #[error("Failed to write output document {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Repository base URL is not an absolute http(s) URL
    #[error("Invalid repository base URL: {0}")]
    InvalidBaseUrl(String),

    /// HTML parsing failed
    #[error("HTML parse error: {0}")]
    Parse(#[from] std::io::Error),
}

impl ConvertError {
    /// Path of the file involved in the failure, if any
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ConvertError::ReadSource { path, .. } | ConvertError::WriteOutput { path, .. } => {
                Some(path)
            }
            ConvertError::InvalidBaseUrl(_) | ConvertError::Parse(_) => None,
        }
    }
}
