//! Error types for itin-export.

use thiserror::Error;

/// Errors that can occur at the export/import boundary.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, ExportError>`.
pub type ExportResult<T> = Result<T, ExportError>;
