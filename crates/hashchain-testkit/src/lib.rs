//! # Hashchain Testkit
//!
//! Testing utilities for Hashchain.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with expected digests for cross-implementation verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Deterministic clocks and prebuilt chains
//!
//! ## Golden Vectors
//!
//! ```rust
//! use hashchain_testkit::vectors::{all_vectors, block_from_vector};
//!
//! for vector in all_vectors() {
//!     let block = block_from_vector(&vector);
//!     assert_eq!(hex::encode(&block.hash), vector.expected_hash);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use hashchain_testkit::generators::{block_from_params, BlockParams};
//!
//! proptest! {
//!     #[test]
//!     fn sealed_blocks_are_self_consistent(params: BlockParams) {
//!         prop_assert!(block_from_params(&params).has_valid_hash());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use hashchain_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let chain = fixture.chain_of(&[b"foo", b"bar"]);
//! assert!(chain.verify());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{SteppingClock, TestFixture};
pub use generators::{block_from_params, BlockParams};
pub use vectors::{all_vectors, block_from_vector, verify_all_vectors, GoldenVector};
