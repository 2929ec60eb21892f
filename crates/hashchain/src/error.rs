//! Error types for the chain ledger.

use hashchain_core::{CodecError, ValidationError};
use thiserror::Error;

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// A block or the chain failed link validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Encoding or decoding failed.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Result type for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;
