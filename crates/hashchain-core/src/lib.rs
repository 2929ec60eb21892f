//! # Hashchain Core
//!
//! Pure primitives for Hashchain: blocks, digests, and link validation.
//!
//! This crate contains no I/O, no storage, no networking. It is pure computation
//! over hash-linked records, plus the wall clock behind the [`Clock`] trait.
//!
//! ## Key Types
//!
//! - [`Block`] - The atomic, immutable record of a chain
//! - [`Sha256Hash`] - The 32-byte digest committing to a block's content
//! - [`Clock`] - Source of block timestamps ([`SystemClock`], [`FixedClock`])
//!
//! ## Operations
//!
//! - [`Block::genesis`] - Create the predecessor-less anchor block
//! - [`Block::append`] - Derive a successor block from a parent and a payload
//! - [`Block::verify`] - Check that a block is an untampered successor of a parent
//! - [`verify_chain`] - Check every link of an ordered sequence of blocks
//!
//! ## Digest Layout
//!
//! See [`block_digest`]. The layout is fixed so that independent
//! implementations produce identical hashes.

pub mod block;
pub mod clock;
pub mod codec;
pub mod crypto;
pub mod error;
pub mod validation;

pub use block::{Block, BlockBuilder, GENESIS_INDEX};
pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{decode_block, decode_chain, encode_block, encode_chain, encode_chain_pretty};
pub use crypto::{block_digest, Sha256Hash, DIGEST_LEN};
pub use error::{CodecError, ValidationError};
pub use validation::{validate_chain, validate_link, verify_chain};
