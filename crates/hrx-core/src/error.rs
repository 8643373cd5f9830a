//! Error types for the hrx-core library.

use thiserror::Error;

/// Main error type for the hrx library.
///
/// Extraction itself never fails; noisy input degrades into low-confidence
/// or empty forms. Errors only arise at the configuration and serialization
/// boundary.
#[derive(Error, Debug)]
pub enum HrxError {
    /// Configuration error (invalid threshold or weight values).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading or writing a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the hrx library.
pub type Result<T> = std::result::Result<T, HrxError>;
