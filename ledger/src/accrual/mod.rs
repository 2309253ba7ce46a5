//! Accrual scheduler
//!
//! Advances the simulated calendar by one month per call and capitalizes
//! interest on every savings account whose accrual window has elapsed.
//!
//! # Critical Invariants
//!
//! - The whole account set is evaluated against the *same* next date before
//!   the clock commits, so results never depend on iteration order
//! - `last_interest_applied` moves forward by exactly one clock step when an
//!   account accrues, and is untouched otherwise
//! - The sweep has no caller-visible error path: accounts that are not due
//!   are simply left alone
//!
//! # Stepwise model
//!
//! Accrual is deliberately stepwise: an account is due only when its next
//! due date lands in the same calendar month and year as the upcoming clock
//! date. A due month the clock has already passed is never caught up - there
//! is no retroactive or partial accrual.

use crate::core::clock::SimClock;
use crate::models::store::AccountStore;
use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

/// Result of one accrual sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepResult {
    /// Number of savings accounts that capitalized interest this sweep
    pub credited: usize,

    /// The simulated date after the sweep committed
    pub current_date: NaiveDate,
}

/// Month-stepping interest scheduler
///
/// Owns the simulated clock: nothing else in the system advances time.
///
/// # Example
/// ```
/// use bank_ledger_core::{
///     Account, AccountStore, AccrualScheduler, CapitalizationFrequency, Currency,
///     Money, SavingsTerms,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let jan_15 = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let mut store = AccountStore::new(vec![Account::savings(
///     "SAV_1",
///     Money::new(Decimal::new(100, 0), Currency::Usd),
///     SavingsTerms::new(
///         Decimal::new(5, 2), // 5% per period
///         CapitalizationFrequency::Monthly,
///         jan_15,
///     ),
/// )]);
///
/// let mut scheduler = AccrualScheduler::new(jan_15);
/// let sweep = scheduler.advance(&mut store);
///
/// assert_eq!(sweep.credited, 1);
/// assert_eq!(
///     store.get("SAV_1").unwrap().balance().amount,
///     Decimal::new(105, 0)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AccrualScheduler {
    clock: SimClock,
}

impl AccrualScheduler {
    /// Create a scheduler with the simulated clock at `start_date`
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            clock: SimClock::new(start_date),
        }
    }

    /// The current simulated date
    pub fn current_date(&self) -> NaiveDate {
        self.clock.current_date()
    }

    /// Read-only handle to the simulated clock
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Advance simulated time by one month and capitalize due interest
    ///
    /// Every savings account whose next due date falls in the same calendar
    /// month and year as the upcoming date accrues one period of interest
    /// (`balance += balance * rate`, own currency) and has its
    /// `last_interest_applied` set to the new date. All other accounts are
    /// left unchanged. The clock commits after the sweep.
    pub fn advance(&mut self, store: &mut AccountStore) -> SweepResult {
        let next = self.clock.next_month();
        let mut credited = 0;

        for account in store.accounts_mut().values_mut() {
            let Some(terms) = account.savings_terms() else {
                continue;
            };

            let due = terms.next_due_date();
            if due.month() == next.month() && due.year() == next.year() {
                account.apply_interest(next);
                credited += 1;
                trace!(account = account.id(), %next, "interest capitalized");
            }
        }

        self.clock.advance();
        debug!(date = %self.clock.current_date(), credited, "accrual sweep committed");

        SweepResult {
            credited,
            current_date: self.clock.current_date(),
        }
    }
}
