//! Error types for destination implementations
//!
//! The dispatch engine itself is best-effort and never surfaces failures
//! to the caller; these errors exist for `Destination::send` implementations
//! to report their own write problems.

pub type Result<T> = std::result::Result<T, FanlogError>;

#[derive(Debug, thiserror::Error)]
pub enum FanlogError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Destination has no bound delivery queue
    #[error("Destination '{name}' has no bound queue")]
    QueueUnbound { name: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl FanlogError {
    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        FanlogError::WriterError(msg.into())
    }

    /// Create a queue-unbound error
    pub fn queue_unbound(name: impl Into<String>) -> Self {
        FanlogError::QueueUnbound { name: name.into() }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FanlogError::Other(msg.into())
    }
}
