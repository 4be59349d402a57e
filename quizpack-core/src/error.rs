//! Error types for question pack processing
//!
//! Every variant is terminal for the request that produced it. Nothing in
//! this crate retries.

use thiserror::Error;

/// Core errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// The corpus had no non-whitespace content
    #[error("no question blocks found in corpus")]
    EmptyCorpus,

    /// The randomly selected block is over the configured cap
    #[error("selected block #{index} is too long ({length} characters, limit {max})")]
    BlockTooLarge {
        /// Position of the selected block
        index: usize,
        /// Length of the block in characters
        length: usize,
        /// Configured maximum block length
        max: usize,
    },

    /// Fewer than two usable names were given to the picker
    #[error("at least 2 names are required, got {found}")]
    InsufficientInput {
        /// Number of non-empty names after trimming
        found: usize,
    },

    /// A size limit was zero
    #[error("invalid limit {name}: {value} (must be positive)")]
    InvalidLimit {
        /// Name of the limit
        name: &'static str,
        /// The rejected value
        value: usize,
    },

    /// A block index outside the parsed list was requested
    #[error("block #{index} does not exist (corpus has {count} blocks)")]
    BlockNotFound {
        /// Requested position
        index: usize,
        /// Number of parsed blocks
        count: usize,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(err.to_string())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
