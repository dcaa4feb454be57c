//! Error type shared across the worker components.
//!
//! There is a single error enum for the whole workspace: the cache layer,
//! the event loop, and the worker lifecycle all report through it, so an
//! installation failure carries its cause to the host unchanged.

/// Errors that can occur during worker operations.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerError {
    /// Live network fetch failed
    Network(String),
    /// Cache store operation error
    Cache(String),
    /// An asset could not be pre-cached (resolved but not OK)
    PrecacheFailed {
        /// Asset URL that failed
        url: String,
        /// Status the asset resolved with
        status: u16,
    },
    /// Operation attempted in the wrong lifecycle state
    InvalidState {
        /// What the operation required
        expected: String,
        /// What was actually the case
        actual: String,
    },
}

impl std::fmt::Display for WorkerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerError::Network(msg) => write!(f, "Network error: {}", msg),
            WorkerError::Cache(msg) => write!(f, "Cache error: {}", msg),
            WorkerError::PrecacheFailed { url, status } => {
                write!(f, "Failed to pre-cache '{}': status {}", url, status)
            }
            WorkerError::InvalidState { expected, actual } => {
                write!(f, "Invalid state: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for WorkerError {}
