//! Error types for Hashchain Core.
//!
//! Integrity failures surface to callers as `false` from [`Block::verify`];
//! these enums carry the diagnostics behind that answer.
//!
//! [`Block::verify`]: crate::Block::verify

use thiserror::Error;

/// Reasons a block fails to follow its claimed parent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("hash mismatch at index {index}: stored {stored}, computed {computed}")]
    HashMismatch {
        index: u64,
        stored: String,
        computed: String,
    },

    #[error("invalid index: expected {expected}, got {got}")]
    IndexDiscontinuity { expected: u64, got: u64 },

    #[error("parent index {0} has no successor")]
    IndexOverflow(u64),

    #[error("prev_hash at index {index} does not match parent hash {parent}")]
    PrevHashMismatch { index: u64, parent: String },

    #[error("chain broken at position {position}: {source}")]
    BrokenChain {
        position: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Position in the chain where validation stopped, if known.
    pub fn position(&self) -> Option<usize> {
        match self {
            ValidationError::BrokenChain { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// The underlying link fault, unwrapping any chain position context.
    pub fn fault(&self) -> &ValidationError {
        match self {
            ValidationError::BrokenChain { source, .. } => source.fault(),
            other => other,
        }
    }
}

/// Errors from encoding or decoding blocks in the interchange format.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
