//! Error types for the Cirrus wrapper layer

use thiserror::Error;

/// Main error type for Cirrus core operations
#[derive(Debug, Error)]
pub enum CoreError {
    /// The 64-bit UID space has been exhausted. Fatal for the allocation
    /// path; callers are not expected to retry.
    #[error("UID space exhausted")]
    UidExhausted,

    #[error("notifier constructed without a callback")]
    MissingCallback,

    #[error("Notifier error: {0}")]
    Notifier(String),

    #[error("Widget error: {0}")]
    Widget(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl CoreError {
    /// Create a notifier error from a string
    pub fn notifier<S: Into<String>>(msg: S) -> Self {
        Self::Notifier(msg.into())
    }

    /// Create a widget error from a string
    pub fn widget<S: Into<String>>(msg: S) -> Self {
        Self::Widget(msg.into())
    }

    /// Create a configuration error from a string
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an other error from a string
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}

/// Result type alias for Cirrus core operations
pub type Result<T> = std::result::Result<T, CoreError>;
