//! Error types for pith.

/// Errors that can occur while selecting representative chunks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input was empty where content is required (blank text, empty chunk list).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A configuration value is out of range.
    #[error("invalid configuration for {name}: {message}")]
    InvalidConfig {
        /// The offending option.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// The embedding provider failed.
    ///
    /// Provider failures are opaque (network, model, encoding) and are not
    /// retried by this crate; retry policy belongs to the caller.
    #[error("embedding provider error: {0}")]
    Embedding(String),

    /// Cluster formation or nearest-neighbor computation failed.
    #[error("clustering error: {0}")]
    Clustering(String),
}

/// Result type for pith operations.
pub type Result<T> = std::result::Result<T, Error>;
