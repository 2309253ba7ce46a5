//! Injected identity and time providers
//!
//! Transaction records need a fresh unique id and a real-time timestamp.
//! Both come from injected providers so the settlement engine stays
//! deterministic under test. Neither is used for accrual timing - accrual
//! runs exclusively on the simulated clock.

use chrono::{DateTime, Utc};
use std::cell::Cell;

/// Source of unique transaction identifiers
pub trait TransactionIdSource {
    /// Produce a fresh id, unique within this source
    fn next_id(&self) -> String;
}

/// Production id source backed by UUID v4
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdSource;

impl TransactionIdSource for UuidIdSource {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic id source for tests and demos
///
/// Produces `"TX-1"`, `"TX-2"`, ... in sequence.
///
/// # Example
/// ```
/// use bank_ledger_core::{SequentialIdSource, TransactionIdSource};
///
/// let ids = SequentialIdSource::new();
/// assert_eq!(ids.next_id(), "TX-1");
/// assert_eq!(ids.next_id(), "TX-2");
/// ```
#[derive(Debug, Default)]
pub struct SequentialIdSource {
    next: Cell<u64>,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionIdSource for SequentialIdSource {
    fn next_id(&self) -> String {
        let n = self.next.get() + 1;
        self.next.set(n);
        format!("TX-{n}")
    }
}

/// Source of real-time timestamps for transaction records
pub trait WallClock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production wall clock backed by the system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemWallClock;

impl WallClock for SystemWallClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Wall clock pinned to a fixed instant, for tests and demos
#[derive(Debug, Clone, Copy)]
pub struct FixedWallClock {
    instant: DateTime<Utc>,
}

impl FixedWallClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl WallClock for FixedWallClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
