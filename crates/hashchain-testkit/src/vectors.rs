//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the digest layout: any implementation fed the same
//! fields must produce the same hash bytes.

use hashchain_core::{block_digest, Block, BlockBuilder, Sha256Hash};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Chain position.
    pub index: u64,
    /// Whole seconds since the Unix epoch.
    pub timestamp: i64,
    /// Payload bytes.
    pub data: &'static [u8],
    /// Predecessor hash (hex, empty for anchors).
    pub prev_hash: &'static str,
    /// Expected block hash (hex).
    pub expected_hash: &'static str,
}

const GENESIS: &str = "1eb5e14a950c47248c26a2ab067883558ad39b6ca8a7738f88094c69e7c56f1e";
const FOO: &str = "ccf2959ff69e5b0a052ad5a02c1c89372ee91623e32ffdbf344873967a81bd23";

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "Genesis at 2023-11-14T22:13:20Z",
            index: 0,
            timestamp: 1_700_000_000,
            data: b"",
            prev_hash: "",
            expected_hash: GENESIS,
        },
        GoldenVector {
            name: "foo after genesis",
            index: 1,
            timestamp: 1_700_000_001,
            data: b"foo",
            prev_hash: GENESIS,
            expected_hash: FOO,
        },
        GoldenVector {
            name: "bar after foo",
            index: 2,
            timestamp: 1_700_000_002,
            data: b"bar",
            prev_hash: FOO,
            expected_hash: "2132e5c7c8494004fa192a5aee21d116b31b9b0fd7f7b26002b6620fa518a665",
        },
        GoldenVector {
            name: "Empty payload after genesis",
            index: 1,
            timestamp: 1_700_000_001,
            data: b"",
            prev_hash: GENESIS,
            expected_hash: "302325d426481a4340f060973078e1616cdcd7a02a9e0d7e31e8064b83dd4bc3",
        },
        GoldenVector {
            name: "Genesis at the Unix epoch",
            index: 0,
            timestamp: 0,
            data: b"",
            prev_hash: "",
            expected_hash: "374708fff7719dd5979ec875d56cd2286f6d3cf7ec317a3b25632aab28ec37bb",
        },
        GoldenVector {
            name: "Genesis one second before the epoch",
            index: 0,
            timestamp: -1,
            data: b"",
            prev_hash: "",
            expected_hash: "787979ee6a78d79a5c6cf1f3ede7cb1d40a6ae9e410062d0b57f848ca083edd6",
        },
    ]
}

/// Build the block described by a golden vector.
///
/// Vectors hold hex literals written by hand; a malformed `prev_hash` is a
/// bug in the vector table, so it panics.
pub fn block_from_vector(vector: &GoldenVector) -> Block {
    let prev = hex::decode(vector.prev_hash).expect("golden vector prev_hash is valid hex");

    BlockBuilder::new(vector.index)
        .unix_timestamp(vector.timestamp)
        .expect("golden vector timestamp is representable")
        .data(vector.data)
        .prev_hash(prev)
        .seal()
}

/// Check every vector, reporting `(name, matches, computed_hex)`.
///
/// Call this to verify your implementation matches the reference.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let prev = hex::decode(v.prev_hash).unwrap_or_default();
            let digest = block_digest(v.index, v.timestamp, v.data, &prev);
            let matches = Sha256Hash::from_hex(v.expected_hash).ok() == Some(digest);
            (v.name.to_string(), matches, digest.to_hex())
        })
        .collect()
}
