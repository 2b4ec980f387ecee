//! Crate-level error types.
//!
//! [`CampusError`] unifies every error source (configuration, terminal,
//! mock-data fixtures) behind a single enum so callers can match on the
//! variant they care about while still using the `?` operator for easy
//! propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CampusError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum CampusError {
    /// An environment-variable setting was missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal setup, teardown, or drawing failed.
    #[error("terminal error: {0}")]
    Io(String),

    /// An embedded mock-data fixture failed to deserialize.
    #[error("data error: {0}")]
    Data(#[from] serde_json::Error),
}
