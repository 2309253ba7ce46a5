//! Bank Ledger Core - In-Memory Accrual and Settlement Engine
//!
//! A small banking ledger core: accounts, periodic interest accrual on
//! savings accounts, and money movements with currency conversion and
//! balance-integrity checks.
//!
//! # Architecture
//!
//! - **core**: Simulated calendar clock and injected identity/time providers
//! - **models**: Domain types (Money, Account, Transaction, AccountStore)
//! - **fx**: Currency conversion (trait + rate table)
//! - **accrual**: Interest scheduler driven by the simulated clock
//! - **settlement**: Transfer and withdrawal execution, read-only queries
//!
//! # Critical Invariants
//!
//! 1. No account balance ever goes negative through a transfer or withdrawal
//! 2. A savings account's last interest date only moves forward, one accrual
//!    period at a time
//! 3. Transaction records are immutable and appended exactly once per account
//!    they touch; the destination copy is already converted
//!
//! # Example
//!
//! ```
//! use bank_ledger_core::{
//!     Account, AccountStore, AccrualScheduler, Currency, Money, RateTable,
//!     SettlementEngine,
//! };
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let mut store = AccountStore::new(vec![
//!     Account::checking("ACC_1", Money::new(Decimal::new(100_00, 2), Currency::Usd)),
//!     Account::checking("ACC_2", Money::new(Decimal::ZERO, Currency::Usd)),
//! ]);
//!
//! let engine = SettlementEngine::new(Box::new(RateTable::new()));
//! let tx = engine
//!     .transfer(
//!         &mut store,
//!         "ACC_1",
//!         "ACC_2",
//!         Money::new(Decimal::new(40_00, 2), Currency::Usd),
//!     )
//!     .unwrap();
//!
//! assert_eq!(tx.amount().currency, Currency::Usd);
//! assert_eq!(
//!     engine.check_funds(&store, "ACC_2").unwrap().amount,
//!     Decimal::new(40_00, 2)
//! );
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let mut scheduler = AccrualScheduler::new(start);
//! scheduler.advance(&mut store); // clock -> 2024-02-15, no savings accounts yet
//! ```

// Module declarations
pub mod accrual;
pub mod core;
pub mod fx;
pub mod models;
pub mod settlement;

// Re-exports for convenience
pub use crate::core::clock::SimClock;
pub use crate::core::providers::{
    FixedWallClock, SequentialIdSource, SystemWallClock, TransactionIdSource, UuidIdSource,
    WallClock,
};
pub use accrual::{AccrualScheduler, SweepResult};
pub use fx::{CurrencyConverter, RateTable};
pub use models::{
    account::{Account, AccountError, AccountKind, CapitalizationFrequency, SavingsTerms},
    money::{Currency, Money},
    store::AccountStore,
    transaction::Transaction,
};
pub use settlement::{SettlementEngine, SettlementError};
