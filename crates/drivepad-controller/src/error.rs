use thiserror::Error;

/// Error type for device session operations.
#[derive(Debug, Error)]
pub enum Error {
    /// More than one attached device matches the search term. This is an
    /// operator-level configuration problem, never retried.
    #[error("multiple input devices match '{term}': {names}; use a more specific search term")]
    AmbiguousDevice { term: String, names: String },
    /// An I/O failure outside the transparently-retried read path.
    #[error("device i/o: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient result alias for session operations.
pub type Result<T> = std::result::Result<T, Error>;
