//! Leaseguard Error Types

use thiserror::Error;

/// Result type alias for leaseguard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Leaseguard error types
///
/// The lock facade never produces errors of its own: everything it returns
/// originates in the wrapped `ResourceLock` implementation and is passed
/// through unchanged. The variants below are the vocabulary backend
/// implementations report through.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Lock backend errors
    #[error("Election record not found at {0}")]
    RecordNotFound(String),

    #[error("Conflicting write to {resource}: {reason}")]
    Conflict { resource: String, reason: String },

    #[error("Lock backend unavailable: {0}")]
    Backend(String),
}

impl Error {
    /// Check if this error means no election record exists yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::RecordNotFound(_))
    }

    /// Check if this error is a conflicting or stale write
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict { .. })
    }

    /// Check if this error is worth retrying on a later cycle
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Backend(_) | Error::Conflict { .. })
    }
}
