//! JSON interchange format for blocks and chains.
//!
//! A block is an object with the keys `Index`, `Timestamp`, `Data`,
//! `PrevHash` and `Hash`:
//! - `Index` is a JSON number
//! - `Timestamp` is RFC 3339, keeping sub-second precision
//! - byte fields are standard padded base64; empty fields encode as `""`
//!   and `null` decodes as empty
//!
//! A chain is a JSON array of blocks. Decoding never recomputes or repairs
//! hashes: a decoded block carries exactly the hash it was encoded with.

use crate::block::Block;
use crate::error::CodecError;

/// Serde adapter for byte fields as base64 strings.
pub(crate) mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use bytes::Bytes;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &Bytes, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Bytes, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Bytes::new()),
            Some(encoded) => STANDARD
                .decode(encoded.as_bytes())
                .map(Bytes::from)
                .map_err(D::Error::custom),
        }
    }
}

/// Encode a single block as compact JSON.
pub fn encode_block(block: &Block) -> Result<String, CodecError> {
    Ok(serde_json::to_string(block)?)
}

/// Decode a single block from JSON.
pub fn decode_block(json: &str) -> Result<Block, CodecError> {
    Ok(serde_json::from_str(json)?)
}

/// Encode an ordered sequence of blocks as a compact JSON array.
pub fn encode_chain(blocks: &[Block]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(blocks)?)
}

/// Encode an ordered sequence of blocks as an indented JSON array.
pub fn encode_chain_pretty(blocks: &[Block]) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(blocks)?)
}

/// Decode an ordered sequence of blocks from a JSON array.
pub fn decode_chain(json: &str) -> Result<Vec<Block>, CodecError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockBuilder;
    use crate::clock::FixedClock;
    use crate::validation::verify_chain;
    use bytes::Bytes;
    use chrono::{Duration, TimeZone, Utc};

    fn genesis() -> Block {
        Block::genesis_with(&FixedClock::at_unix(1_700_000_000).unwrap())
    }

    #[test]
    fn test_block_json_shape() {
        let block = genesis().append_with("foo", &FixedClock::at_unix(1_700_000_001).unwrap());
        let value: serde_json::Value =
            serde_json::from_str(&encode_block(&block).unwrap()).unwrap();

        assert_eq!(value["Index"], 1);
        assert_eq!(value["Timestamp"], "2023-11-14T22:13:21Z");
        assert_eq!(value["Data"], "Zm9v");
        assert_eq!(value["PrevHash"], "HrXhSpUMRySMJqKrBniDVYrTm2yop3OPiAlMaefFbx4=");
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_genesis_empty_fields_encode_as_empty_strings() {
        let value: serde_json::Value =
            serde_json::from_str(&encode_block(&genesis()).unwrap()).unwrap();

        assert_eq!(value["Data"], "");
        assert_eq!(value["PrevHash"], "");
    }

    #[test]
    fn test_null_byte_fields_decode_as_empty() {
        let json = format!(
            r#"{{"Index":0,"Timestamp":"2023-11-14T22:13:20Z","Data":null,"PrevHash":null,"Hash":"{}"}}"#,
            "HrXhSpUMRySMJqKrBniDVYrTm2yop3OPiAlMaefFbx4="
        );
        let block = decode_block(&json).unwrap();

        assert!(block.data.is_empty());
        assert!(block.prev_hash.is_empty());
        assert_eq!(block, genesis());
        assert!(block.has_valid_hash());
    }

    #[test]
    fn test_roundtrip_preserves_subsecond_timestamp() {
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::nanoseconds(123_456_789);
        let block = Block::genesis_with(&FixedClock::new(at)).append_with(
            Bytes::from(vec![0u8, 255, 10]),
            &FixedClock::new(at),
        );

        let decoded = decode_block(&encode_block(&block).unwrap()).unwrap();
        assert_eq!(decoded, block);
        assert_eq!(decoded.timestamp, at);
        assert!(decoded.has_valid_hash());
    }

    #[test]
    fn test_chain_roundtrip_still_verifies() {
        let g = genesis();
        let b1 = g.append_with("foo", &FixedClock::at_unix(1_700_000_001).unwrap());
        let b2 = b1.append_with("bar", &FixedClock::at_unix(1_700_000_002).unwrap());
        let blocks = vec![g, b1, b2];

        let decoded = decode_chain(&encode_chain_pretty(&blocks).unwrap()).unwrap();
        assert_eq!(decoded, blocks);
        assert!(verify_chain(&decoded));
    }

    #[test]
    fn test_decoding_keeps_carried_hash() {
        let mut block = BlockBuilder::new(1).data("foo").seal();
        block.hash = Bytes::from_static(b"not a digest");

        let decoded = decode_block(&encode_block(&block).unwrap()).unwrap();
        assert_eq!(decoded.hash.as_ref(), b"not a digest");
        assert!(!decoded.has_valid_hash());
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        let json = r#"{"Index":0,"Timestamp":"2023-11-14T22:13:20Z","Data":"***","PrevHash":"","Hash":""}"#;
        assert!(matches!(decode_block(json), Err(CodecError::Json(_))));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"Index":0,"Timestamp":"2023-11-14T22:13:20Z","Data":""}"#;
        assert!(decode_block(json).is_err());
    }
}
