//! Link validation: hash recomputation and predecessor checks.
//!
//! The genesis block is a trust anchor. Whole-chain validation starts at
//! position 1 and never checks position 0 on its own.

use crate::block::Block;
use crate::error::ValidationError;

/// Validate that `block` is an untampered successor of `parent`.
///
/// This performs:
/// - Hash recomputation over the block's stored fields
/// - Index continuity (`block.index == parent.index + 1`)
/// - Hash linkage (`block.prev_hash == parent.hash`)
pub fn validate_link(block: &Block, parent: &Block) -> Result<(), ValidationError> {
    // 1. Hash commits to the stored fields
    let computed = block.compute_hash();
    if !computed.matches(&block.hash) {
        return Err(ValidationError::HashMismatch {
            index: block.index,
            stored: hex::encode(&block.hash),
            computed: computed.to_hex(),
        });
    }

    // 2. Index follows the parent
    let expected = parent
        .index
        .checked_add(1)
        .ok_or(ValidationError::IndexOverflow(parent.index))?;
    if block.index != expected {
        return Err(ValidationError::IndexDiscontinuity {
            expected,
            got: block.index,
        });
    }

    // 3. Linked to the parent's hash
    if block.prev_hash != parent.hash {
        return Err(ValidationError::PrevHashMismatch {
            index: block.index,
            parent: hex::encode(&parent.hash),
        });
    }

    Ok(())
}

/// Validate every link of an ordered sequence of blocks.
///
/// Empty and single-block sequences are valid. The first failing position is
/// reported as [`ValidationError::BrokenChain`].
pub fn validate_chain(blocks: &[Block]) -> Result<(), ValidationError> {
    for (position, pair) in blocks.windows(2).enumerate() {
        validate_link(&pair[1], &pair[0]).map_err(|e| ValidationError::BrokenChain {
            position: position + 1,
            source: Box::new(e),
        })?;
    }
    Ok(())
}

/// Whether every link of an ordered sequence of blocks holds.
pub fn verify_chain(blocks: &[Block]) -> bool {
    validate_chain(blocks).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockBuilder;
    use crate::clock::FixedClock;
    use bytes::Bytes;
    use chrono::Duration;

    fn chain() -> Vec<Block> {
        let genesis = Block::genesis_with(&FixedClock::at_unix(1_700_000_000).unwrap());
        let b1 = genesis.append_with("foo", &FixedClock::at_unix(1_700_000_001).unwrap());
        let b2 = b1.append_with("bar", &FixedClock::at_unix(1_700_000_002).unwrap());
        vec![genesis, b1, b2]
    }

    #[test]
    fn test_valid_link() {
        let blocks = chain();
        assert!(validate_link(&blocks[1], &blocks[0]).is_ok());
        assert!(validate_link(&blocks[2], &blocks[1]).is_ok());
    }

    #[test]
    fn test_tampered_index() {
        let blocks = chain();
        let mut block = blocks[1].clone();
        block.index = 5;

        let result = validate_link(&block, &blocks[0]);
        assert!(matches!(result, Err(ValidationError::HashMismatch { index: 5, .. })));
    }

    #[test]
    fn test_tampered_timestamp() {
        let blocks = chain();
        let mut block = blocks[1].clone();
        block.timestamp = block.timestamp + Duration::seconds(1);

        let result = validate_link(&block, &blocks[0]);
        assert!(matches!(result, Err(ValidationError::HashMismatch { .. })));
    }

    #[test]
    fn test_tampered_data() {
        let blocks = chain();
        let mut block = blocks[1].clone();
        block.data = Bytes::from_static(b"tampered");

        let result = validate_link(&block, &blocks[0]);
        assert!(matches!(result, Err(ValidationError::HashMismatch { .. })));
    }

    #[test]
    fn test_tampered_prev_hash() {
        let blocks = chain();
        let mut block = blocks[1].clone();
        block.prev_hash = Bytes::from(vec![0u8; 32]);

        let result = validate_link(&block, &blocks[0]);
        assert!(matches!(result, Err(ValidationError::HashMismatch { .. })));
    }

    #[test]
    fn test_resealed_block_with_wrong_index() {
        let blocks = chain();
        // Self-consistent block that skips a position
        let block = BlockBuilder::new(3)
            .unix_timestamp(1_700_000_001)
            .unwrap()
            .data("foo")
            .prev_hash(blocks[0].hash.clone())
            .seal();

        let result = validate_link(&block, &blocks[0]);
        assert_eq!(
            result,
            Err(ValidationError::IndexDiscontinuity {
                expected: 1,
                got: 3
            })
        );
    }

    #[test]
    fn test_mismatched_parent() {
        let blocks = chain();
        // blocks[2] is self-consistent; checked against a stranger at index 1
        // its index lines up but its prev_hash does not
        let stranger = BlockBuilder::new(1)
            .unix_timestamp(1_600_000_000)
            .unwrap()
            .data("other")
            .seal();

        assert!(blocks[2].has_valid_hash());
        let result = validate_link(&blocks[2], &stranger);
        assert!(matches!(result, Err(ValidationError::PrevHashMismatch { index: 2, .. })));
    }

    #[test]
    fn test_parent_at_max_index() {
        let parent = BlockBuilder::new(u64::MAX).seal();
        let block = BlockBuilder::new(0).prev_hash(parent.hash.clone()).seal();

        let result = validate_link(&block, &parent);
        assert_eq!(result, Err(ValidationError::IndexOverflow(u64::MAX)));
    }

    #[test]
    fn test_validate_chain() {
        assert!(validate_chain(&chain()).is_ok());
        assert!(verify_chain(&chain()));
    }

    #[test]
    fn test_empty_and_genesis_only_chains_are_valid() {
        assert!(verify_chain(&[]));
        assert!(verify_chain(&chain()[..1]));
    }

    #[test]
    fn test_genesis_is_not_checked() {
        let mut blocks = chain();
        // Corrupting the anchor alone only breaks the link that follows it
        blocks[0].data = Bytes::from_static(b"rewritten");
        assert!(verify_chain(&blocks[..1]));
        assert!(verify_chain(&blocks));

        blocks[0].hash = Bytes::from_static(b"bogus");
        let err = validate_chain(&blocks).unwrap_err();
        assert_eq!(err.position(), Some(1));
        assert!(matches!(err.fault(), ValidationError::PrevHashMismatch { .. }));
    }

    #[test]
    fn test_tampered_chain_reports_position() {
        let mut blocks = chain();
        blocks[1].data = Bytes::from_static(b"tampered");

        let err = validate_chain(&blocks).unwrap_err();
        assert_eq!(err.position(), Some(1));
        assert!(matches!(err.fault(), ValidationError::HashMismatch { index: 1, .. }));
        assert!(!verify_chain(&blocks));
    }
}
