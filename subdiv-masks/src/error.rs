//! Error types for the subdiv-masks crate.
//!
//! Only building and sizing data can fail. The neighborhood queries
//! themselves are precondition based and never return errors.

use thiserror::Error;

/// Main error type for subdiv-masks operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid topology descriptor.
    #[error("Invalid topology descriptor: {0}")]
    InvalidTopology(String),

    /// Index out of bounds.
    #[error("Index {index} out of bounds (max: {max})")]
    IndexOutOfBounds { index: usize, max: usize },

    /// Invalid buffer size.
    #[error("Invalid buffer size: expected {expected}, got {actual}")]
    InvalidBufferSize { expected: usize, actual: usize },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
