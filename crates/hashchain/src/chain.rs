//! The Chain: an owned, ordered sequence of blocks.
//!
//! The chain is the single writer over its blocks. It stamps new blocks with
//! its clock, appends them at the tip, and checks the links on demand.

use bytes::Bytes;
use tracing::{debug, warn};

use hashchain_core::{
    decode_chain, encode_chain, encode_chain_pretty, validate_chain, validate_link, Block, Clock,
    SystemClock,
};

use crate::error::Result;

/// Configuration for a [`Chain`].
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Whether externally produced blocks must verify against the tip
    /// before [`Chain::ingest`] accepts them.
    pub verify_on_ingest: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            verify_on_ingest: true,
        }
    }
}

/// An append-only, hash-linked sequence of blocks.
#[derive(Debug, Clone)]
pub struct Chain<C: Clock = SystemClock> {
    /// Blocks in index order. The first one is the trust anchor.
    blocks: Vec<Block>,
    /// Source of timestamps for written blocks.
    clock: C,
    /// Configuration.
    config: ChainConfig,
}

impl Chain<SystemClock> {
    /// Create a chain holding a fresh genesis block, stamped with the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock, ChainConfig::default())
    }
}

impl Default for Chain<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Chain<C> {
    /// Create a chain holding a fresh genesis block stamped by `clock`.
    pub fn with_clock(clock: C, config: ChainConfig) -> Self {
        let genesis = Block::genesis_with(&clock);
        debug!(hash = %hex::encode(&genesis.hash), "created genesis block");

        Self {
            blocks: vec![genesis],
            clock,
            config,
        }
    }

    /// Adopt an existing sequence of blocks.
    ///
    /// The blocks are not validated; call [`Chain::validate`] before trusting them.
    pub fn from_blocks(blocks: Vec<Block>, clock: C, config: ChainConfig) -> Self {
        Self {
            blocks,
            clock,
            config,
        }
    }

    /// Decode a chain from its JSON array form.
    ///
    /// Like [`Chain::from_blocks`], this does not validate the links.
    pub fn from_json(json: &str, clock: C, config: ChainConfig) -> Result<Self> {
        let blocks = decode_chain(json)?;
        Ok(Self::from_blocks(blocks, clock, config))
    }

    /// Get the configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Write Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a block carrying `data` at the tip.
    ///
    /// An empty chain gets a genesis block first. Writing never fails.
    pub fn write(&mut self, data: impl Into<Bytes>) -> &Block {
        let block = match self.blocks.last() {
            Some(tip) => tip.append_with(data, &self.clock),
            None => {
                let genesis = Block::genesis_with(&self.clock);
                let block = genesis.append_with(data, &self.clock);
                self.blocks.push(genesis);
                block
            }
        };

        debug!(
            index = block.index,
            len = block.data.len(),
            hash = %hex::encode(&block.hash),
            "appended block"
        );

        self.blocks.push(block);
        &self.blocks[self.blocks.len() - 1]
    }

    /// Push an externally produced block onto the tip.
    ///
    /// With `verify_on_ingest` set, the block must verify against the current
    /// tip. The first block of an empty chain is accepted as its anchor.
    pub fn ingest(&mut self, block: Block) -> Result<()> {
        if self.config.verify_on_ingest {
            if let Some(tip) = self.blocks.last() {
                if let Err(e) = validate_link(&block, tip) {
                    warn!(index = block.index, error = %e, "rejected block");
                    return Err(e.into());
                }
            }
        }

        debug!(index = block.index, "ingested block");
        self.blocks.push(block);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Verification
    // ─────────────────────────────────────────────────────────────────────────

    /// Check every link from position 1 onward.
    pub fn validate(&self) -> Result<()> {
        validate_chain(&self.blocks).map_err(|e| {
            warn!(position = ?e.position(), error = %e, "chain validation failed");
            e.into()
        })
    }

    /// Whether every link from position 1 onward holds.
    pub fn verify(&self) -> bool {
        self.validate().is_ok()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// The most recent block.
    pub fn tip(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// The anchor block.
    pub fn genesis(&self) -> Option<&Block> {
        self.blocks.first()
    }

    /// The block at `position`.
    pub fn get(&self, position: usize) -> Option<&Block> {
        self.blocks.get(position)
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the chain holds no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the blocks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// The blocks in order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Take the blocks out of the chain.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Serialization
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode the chain as a compact JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(encode_chain(&self.blocks)?)
    }

    /// Encode the chain as an indented JSON array.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(encode_chain_pretty(&self.blocks)?)
    }
}

impl<'a, C: Clock> IntoIterator for &'a Chain<C> {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
