//! Error types for textrank_summary
//!
//! Every failure in the crate is a contract violation detected at an API
//! boundary, so a single error type covers all of them.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A contract violation detected before any state was mutated
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A graph was asked to fill itself from zero sentences
    #[error("cannot build a similarity graph from an empty sentence sequence")]
    EmptySentences,

    /// A sentence was looked up in a graph that does not contain it
    #[error("sentence at position {position} is not a vertex of the graph")]
    UnknownVertex { position: usize },

    /// An edge was requested between a sentence and itself
    #[error("cannot add an edge from sentence at position {position} to itself")]
    SelfLoop { position: usize },

    /// A summarizer configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The encoder ran out of integer codes
    #[error("token code space exhausted")]
    CodeSpaceExhausted,
}

impl ValidationError {
    /// Build an [`ValidationError::InvalidConfig`] from any message
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ValidationError::InvalidConfig(message.into())
    }
}
