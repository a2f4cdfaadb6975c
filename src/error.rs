//! Error types for `folio`
//!
//! The controllers themselves never fail: clamping, empty galleries and double
//! teardown are handled as ordinary state. Errors only arise at the edges,
//! when configuration is loaded or validated and when replay traces are parsed.
//!
//! Error variants use `#[source]` to preserve error chains.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `folio`
#[derive(Debug, Error)]
pub enum FolioError {
    /// Header thresholds do not form a non-overlapping hysteresis band
    #[error("Invalid header thresholds: expand ({expand}) must be below condense ({condense})")]
    InvalidThresholds {
        /// Offset below which an upward scroll expands the header
        expand: f64,
        /// Offset above which a downward scroll condenses the header
        condense: f64,
    },

    /// A configured duration is zero where a positive value is required
    #[error("Invalid duration for {0}: must be greater than zero")]
    InvalidDuration(&'static str),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Replay trace could not be interpreted
    #[error("Invalid replay trace: {0}")]
    InvalidTrace(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `folio` operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Convert an error to a message suitable for printing to the person running the tool
pub fn user_facing_message(error: &FolioError) -> String {
    match error {
        FolioError::InvalidThresholds { expand, condense } => format!(
            "The header thresholds overlap (expand {expand}, condense {condense}).\n\n\
             The expand threshold must be strictly smaller than the condense threshold,\n\
             otherwise the header flickers between states."
        ),
        FolioError::InvalidDuration(field) => format!(
            "The setting `{field}` must be a positive number of milliseconds."
        ),
        FolioError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Check that the directory named by FOLIO_HOME exists and is writable."
            .to_string(),
        FolioError::InvalidTrace(reason) => format!(
            "The replay trace could not be used:\n\n{reason}"
        ),
        FolioError::IoError(e) => format!(
            "A file system error occurred:\n\n{e}\n\n\
             Please check file permissions and paths."
        ),
        FolioError::JsonError(e) => format!(
            "A JSON document is malformed:\n\n{e}"
        ),
    }
}
