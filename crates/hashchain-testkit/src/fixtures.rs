//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::cell::Cell;

use chrono::{DateTime, Duration, TimeZone, Utc};
use hashchain::{Chain, ChainConfig};
use hashchain_core::{Block, Clock};

/// Start of every fixture timeline: 2023-11-14T22:13:20Z.
pub const FIXTURE_EPOCH: i64 = 1_700_000_000;

/// A clock that moves forward one second each time it is read.
#[derive(Debug, Clone)]
pub struct SteppingClock {
    next: Cell<DateTime<Utc>>,
}

impl SteppingClock {
    /// First reading is `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            next: Cell::new(start),
        }
    }

    /// First reading is `start` seconds since the Unix epoch.
    ///
    /// Returns `None` if chrono cannot represent `start`.
    pub fn starting_at(start: i64) -> Option<Self> {
        Utc.timestamp_opt(start, 0).single().map(Self::new)
    }

    /// Seconds the next reading will return.
    pub fn peek(&self) -> i64 {
        self.next.get().timestamp()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.next.get();
        self.next.set(now + Duration::seconds(1));
        now
    }
}

/// A test fixture producing deterministic chains.
pub struct TestFixture {
    pub start: DateTime<Utc>,
    pub config: ChainConfig,
}

impl TestFixture {
    /// Fixture starting at [`FIXTURE_EPOCH`] with the default config.
    pub fn new() -> Self {
        Self::starting_at(FIXTURE_EPOCH).expect("fixture epoch is representable")
    }

    /// Fixture starting at `start` seconds since the Unix epoch.
    ///
    /// Returns `None` if chrono cannot represent `start`.
    pub fn starting_at(start: i64) -> Option<Self> {
        let start = Utc.timestamp_opt(start, 0).single()?;
        Some(Self {
            start,
            config: ChainConfig::default(),
        })
    }

    /// A fresh clock for this fixture's timeline.
    pub fn clock(&self) -> SteppingClock {
        SteppingClock::new(self.start)
    }

    /// A chain with only its genesis block.
    pub fn empty_chain(&self) -> Chain<SteppingClock> {
        Chain::with_clock(self.clock(), self.config.clone())
    }

    /// A chain with one block per payload after genesis.
    pub fn chain_of(&self, payloads: &[&[u8]]) -> Chain<SteppingClock> {
        let mut chain = self.empty_chain();
        for payload in payloads {
            chain.write(payload.to_vec());
        }
        chain
    }

    /// The blocks of [`chain_of`](Self::chain_of).
    pub fn blocks_of(&self, payloads: &[&[u8]]) -> Vec<Block> {
        self.chain_of(payloads).into_blocks()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
