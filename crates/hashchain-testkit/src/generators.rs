//! Proptest generators for property-based testing.

use bytes::Bytes;
use chrono::Duration;
use proptest::prelude::*;

use hashchain_core::{Block, BlockBuilder, FixedClock, Sha256Hash, DIGEST_LEN};

/// Generate a random Sha256Hash.
pub fn sha256_hash() -> impl Strategy<Value = Sha256Hash> {
    any::<[u8; DIGEST_LEN]>().prop_map(Sha256Hash)
}

/// Generate a chain position.
pub fn index() -> impl Strategy<Value = u64> {
    0u64..u64::MAX
}

/// Generate whole seconds in a span chrono can represent, pre-epoch included.
pub fn unix_timestamp() -> impl Strategy<Value = i64> {
    -2_000_000_000i64..=8_000_000_000i64
}

/// Generate payload bytes of specified max length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a predecessor hash: empty, a real digest, or arbitrary bytes.
pub fn prev_hash() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        Just(Vec::new()),
        sha256_hash().prop_map(|h| h.as_bytes().to_vec()),
        payload(48),
    ]
}

/// Parameters for generating a block.
#[derive(Debug, Clone)]
pub struct BlockParams {
    pub index: u64,
    pub timestamp: i64,
    pub data: Vec<u8>,
    pub prev_hash: Vec<u8>,
}

impl Arbitrary for BlockParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (index(), unix_timestamp(), payload(512), prev_hash())
            .prop_map(|(index, timestamp, data, prev_hash)| BlockParams {
                index,
                timestamp,
                data,
                prev_hash,
            })
            .boxed()
    }
}

/// Generate a block from parameters.
pub fn block_from_params(params: &BlockParams) -> Block {
    BlockBuilder::new(params.index)
        .unix_timestamp(params.timestamp)
        .expect("generated timestamps are representable")
        .data(params.data.clone())
        .prev_hash(params.prev_hash.clone())
        .seal()
}

/// One field of a block to corrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tamper {
    Index,
    Timestamp,
    Data,
    PrevHash,
}

/// Generate a field to corrupt.
pub fn tamper() -> impl Strategy<Value = Tamper> {
    prop_oneof![
        Just(Tamper::Index),
        Just(Tamper::Timestamp),
        Just(Tamper::Data),
        Just(Tamper::PrevHash),
    ]
}

/// Corrupt one field of `block` without resealing it.
pub fn apply_tamper(block: &Block, tamper: Tamper) -> Block {
    let mut tampered = block.clone();
    match tamper {
        Tamper::Index => tampered.index = tampered.index.wrapping_add(1),
        Tamper::Timestamp => tampered.timestamp = tampered.timestamp + Duration::seconds(1),
        Tamper::Data => {
            let mut data = tampered.data.to_vec();
            data.push(0x5a);
            tampered.data = Bytes::from(data);
        }
        Tamper::PrevHash => {
            let mut prev = tampered.prev_hash.to_vec();
            match prev.first_mut() {
                Some(byte) => *byte ^= 0xff,
                None => prev.push(0),
            }
            tampered.prev_hash = Bytes::from(prev);
        }
    }
    tampered
}
