//! # Hashchain
//!
//! An append-only sequence of data records whose integrity is checked by
//! recomputing and chaining SHA-256 digests.
//!
//! ## Overview
//!
//! - **Block**: Immutable. Commits to its index, timestamp, payload and the
//!   hash of its predecessor.
//! - **Chain**: Owns the ordered blocks. Single writer, appends at the tip.
//! - **Verification**: A broken link is an expected outcome, reported as
//!   `false` (or as a [`ValidationError`] when the reason matters).
//!
//! ## Usage
//!
//! ```rust
//! use hashchain::Chain;
//!
//! let mut chain = Chain::new();
//! chain.write("foo");
//! chain.write("bar");
//!
//! assert!(chain.verify());
//! let json = chain.to_json().unwrap();
//! assert!(json.starts_with('['));
//! ```
//!
//! Blocks can also be built and checked without a [`Chain`]:
//!
//! ```rust
//! use hashchain::Block;
//!
//! let genesis = Block::genesis();
//! let next = genesis.append("payload");
//! assert!(next.verify(&genesis));
//! ```
//!
//! ## Re-exports
//!
//! - `hashchain::core` - Core primitives (Block, digest, clocks, codec)

pub mod chain;
pub mod error;

pub use hashchain_core as core;

pub use chain::{Chain, ChainConfig};
pub use error::{ChainError, Result};

pub use hashchain_core::{
    block_digest, validate_chain, validate_link, verify_chain, Block, BlockBuilder, Clock,
    FixedClock, Sha256Hash, SystemClock, ValidationError,
};
