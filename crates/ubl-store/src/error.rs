use thiserror::Error;

/// Errors from world-state operations.
///
/// Absent keys are not errors (`get` returns `Ok(None)`); this enum covers
/// genuine backend failures only. They are not locally recoverable and
/// propagate to the caller unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Result alias for world-state operations.
pub type StoreResult<T> = Result<T, StoreError>;
