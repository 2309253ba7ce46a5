//! Simulated calendar clock
//!
//! The ledger operates on a simulated "current date" that advances by exactly
//! one calendar month per step. The clock is an explicit value owned by the
//! accrual scheduler, never wall-clock time and never a process-wide global.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Add whole calendar months to a date.
///
/// Day-of-month is clamped to the end of the target month, so Jan 31 + 1
/// month is Feb 28 (Feb 29 in a leap year).
pub(crate) fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .expect("date arithmetic overflow")
}

/// Month-stepping simulated clock
///
/// # Example
/// ```
/// use bank_ledger_core::SimClock;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let mut clock = SimClock::new(start);
/// assert_eq!(clock.current_date(), start);
///
/// clock.advance();
/// assert_eq!(
///     clock.current_date(),
///     NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimClock {
    /// The simulated "today"
    current: NaiveDate,
}

impl SimClock {
    /// Create a clock starting at the given date
    pub fn new(start: NaiveDate) -> Self {
        Self { current: start }
    }

    /// Get the current simulated date
    pub fn current_date(&self) -> NaiveDate {
        self.current
    }

    /// Peek at the date one month ahead without committing it
    ///
    /// The accrual sweep evaluates every account against this date before
    /// the clock moves, so results do not depend on iteration order.
    pub fn next_month(&self) -> NaiveDate {
        add_months(self.current, 1)
    }

    /// Advance the clock by one month
    pub fn advance(&mut self) {
        self.current = self.next_month();
    }
}
