//! Time sources for block timestamps.
//!
//! Block construction takes its clock explicitly so digests can be pinned in
//! tests. [`SystemClock`] is the default everywhere else.

use chrono::{DateTime, TimeZone, Utc};

/// A source of the current instant.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Stop the clock at the given instant.
    pub const fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Stop the clock at whole seconds since the Unix epoch.
    ///
    /// Returns `None` if chrono cannot represent `secs`.
    pub fn at_unix(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
