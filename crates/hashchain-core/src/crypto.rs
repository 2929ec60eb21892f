//! SHA-256 hashing with a strong type, and the block digest layout.

use sha2::{Digest, Sha256};
use std::fmt;

/// Length in bytes of a block digest.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte SHA-256 hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha256Hash(pub [u8; DIGEST_LEN]);

impl Sha256Hash {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        let arr: [u8; DIGEST_LEN] = bytes
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Self(arr))
    }

    /// Compare against a stored digest of arbitrary length.
    pub fn matches(&self, stored: &[u8]) -> bool {
        self.0.as_slice() == stored
    }
}

impl fmt::Debug for Sha256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHA256({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Sha256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Sha256Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Sha256Hash {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

/// Compute the digest committing to a block's content.
///
/// SHA-256 over, in order and with no separators:
///
/// 1. `index` as 8 bytes big-endian
/// 2. `timestamp_secs` (whole seconds since the Unix epoch) as 8 bytes
///    big-endian two's complement
/// 3. the raw `data` bytes
/// 4. the raw `prev_hash` bytes
///
/// Only the first two fields are fixed-width, which is what keeps the
/// concatenation unambiguous.
pub fn block_digest(index: u64, timestamp_secs: i64, data: &[u8], prev_hash: &[u8]) -> Sha256Hash {
    let mut hasher = Sha256::new();
    hasher.update(index.to_be_bytes());
    hasher.update(timestamp_secs.to_be_bytes());
    hasher.update(data);
    hasher.update(prev_hash);
    Sha256Hash(hasher.finalize().into())
}
