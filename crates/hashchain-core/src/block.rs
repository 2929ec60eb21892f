//! Block: the atomic unit of a hash chain.
//!
//! A block is immutable once created. It commits to its own position,
//! timestamp, payload and predecessor through its hash, and links to its
//! predecessor by value: `prev_hash` holds a copy of the parent's hash bytes,
//! never a reference to the parent itself.

use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::codec::base64_bytes;
use crate::crypto::{block_digest, Sha256Hash};
use crate::validation::validate_link;

/// Index of the genesis block.
pub const GENESIS_INDEX: u64 = 0;

/// A single record in a hash chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    /// Position in the chain (genesis = 0).
    pub index: u64,

    /// Creation instant. Only whole seconds enter the digest.
    pub timestamp: DateTime<Utc>,

    /// Opaque payload, possibly empty.
    #[serde(with = "base64_bytes")]
    pub data: Bytes,

    /// Hash of the predecessor (empty for genesis).
    #[serde(with = "base64_bytes")]
    pub prev_hash: Bytes,

    /// Digest over the four fields above, fixed at creation.
    #[serde(with = "base64_bytes")]
    pub hash: Bytes,
}

impl Block {
    /// Create a genesis block stamped with the wall clock.
    pub fn genesis() -> Self {
        Self::genesis_with(&SystemClock)
    }

    /// Create a genesis block stamped by `clock`.
    pub fn genesis_with(clock: &impl Clock) -> Self {
        BlockBuilder::new(GENESIS_INDEX)
            .timestamp(clock.now())
            .seal()
    }

    /// Derive a successor of `self` carrying `data`, stamped with the wall clock.
    pub fn append(&self, data: impl Into<Bytes>) -> Self {
        self.append_with(data, &SystemClock)
    }

    /// Derive a successor of `self` carrying `data`, stamped by `clock`.
    ///
    /// `self` is not validated. At `u64::MAX` the index saturates, so the
    /// result will not verify against `self`.
    pub fn append_with(&self, data: impl Into<Bytes>, clock: &impl Clock) -> Self {
        BlockBuilder::new(self.index.saturating_add(1))
            .timestamp(clock.now())
            .data(data)
            .prev_hash(self.hash.clone())
            .seal()
    }

    /// Check that `self` is an untampered successor of `parent`.
    ///
    /// True iff the stored hash matches a recomputation over the stored
    /// fields, the index is one past the parent's, and `prev_hash` equals the
    /// parent's hash byte-for-byte. Use [`validate_link`] to learn which
    /// check failed.
    pub fn verify(&self, parent: &Block) -> bool {
        validate_link(self, parent).is_ok()
    }

    /// Recompute the digest from the stored fields.
    pub fn compute_hash(&self) -> Sha256Hash {
        block_digest(self.index, self.timestamp_secs(), &self.data, &self.prev_hash)
    }

    /// Whether the stored hash matches the stored fields.
    pub fn has_valid_hash(&self) -> bool {
        self.compute_hash().matches(&self.hash)
    }

    /// Whole seconds since the Unix epoch, as hashed.
    pub fn timestamp_secs(&self) -> i64 {
        self.timestamp.timestamp()
    }

    /// Check if this block sits at the genesis position.
    pub fn is_genesis(&self) -> bool {
        self.index == GENESIS_INDEX
    }
}

/// Builder for blocks with explicit field values.
///
/// [`seal`](BlockBuilder::seal) computes the hash, so every built block is
/// self-consistent.
pub struct BlockBuilder {
    index: u64,
    timestamp: DateTime<Utc>,
    data: Bytes,
    prev_hash: Bytes,
}

impl BlockBuilder {
    /// Start building a block at `index`.
    pub fn new(index: u64) -> Self {
        Self {
            index,
            timestamp: DateTime::<Utc>::default(),
            data: Bytes::new(),
            prev_hash: Bytes::new(),
        }
    }

    /// Set the timestamp.
    pub fn timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = ts;
        self
    }

    /// Set the timestamp from whole seconds since the Unix epoch.
    ///
    /// Returns `None` if chrono cannot represent `secs`.
    pub fn unix_timestamp(mut self, secs: i64) -> Option<Self> {
        self.timestamp = Utc.timestamp_opt(secs, 0).single()?;
        Some(self)
    }

    /// Set the payload.
    pub fn data(mut self, data: impl Into<Bytes>) -> Self {
        self.data = data.into();
        self
    }

    /// Set the predecessor hash.
    pub fn prev_hash(mut self, prev: impl Into<Bytes>) -> Self {
        self.prev_hash = prev.into();
        self
    }

    /// Compute the hash and produce the block.
    pub fn seal(self) -> Block {
        let hash = block_digest(
            self.index,
            self.timestamp.timestamp(),
            &self.data,
            &self.prev_hash,
        );

        Block {
            index: self.index,
            timestamp: self.timestamp,
            data: self.data,
            prev_hash: self.prev_hash,
            hash: Bytes::copy_from_slice(hash.as_bytes()),
        }
    }
}
