//! Error type shared by the loader, the broadcast core and the reporters.

use thiserror::Error;

/// Result type for broadcast tree operations.
pub type Result<T> = std::result::Result<T, BroadcastError>;

/// Errors that abort a broadcast tree computation.
#[derive(Debug, Error)]
pub enum BroadcastError {
    /// A line of the locations file is not a `(x,y)` pair.
    #[error("malformed node on line {line} ({content:?}): {reason}")]
    InputFormat { line: usize, content: String, reason: String },

    /// No node could be read, so there is no broadcast source.
    #[error("no broadcast source: the node list is empty")]
    MissingSource,

    /// The greedy loop reached a state its own rules should make impossible.
    #[error("algorithm invariant violated: {0}")]
    AlgorithmInvariant(String),

    /// The run configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
