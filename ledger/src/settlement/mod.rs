//! Settlement engine
//!
//! Executes value-moving operations - transfers between two accounts and
//! withdrawals from one - with currency conversion and balance-integrity
//! enforcement, plus read-only balance and history queries.
//!
//! # Critical Invariants
//!
//! - **Atomicity**: every validation runs before the first mutation, so a
//!   failed call leaves both accounts exactly as they were
//! - **Non-negativity**: a transfer or withdrawal never pushes a balance
//!   below zero
//! - **Single record**: one `Transaction` per successful operation, appended
//!   to each touched account's history, denominated in the destination
//!   account's currency

use crate::core::providers::{
    SystemWallClock, TransactionIdSource, UuidIdSource, WallClock,
};
use crate::fx::CurrencyConverter;
use crate::models::account::AccountError;
use crate::models::money::Money;
use crate::models::store::AccountStore;
use crate::models::transaction::Transaction;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by settlement operations
///
/// All are terminal for the triggering call; nothing is retried or recovered
/// internally.
#[derive(Debug, Error, PartialEq)]
pub enum SettlementError {
    #[error("account {account_id} does not exist")]
    NotFound { account_id: String },

    #[error("invalid operation: {reason}")]
    InvalidOperation { reason: String },

    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Decimal, available: Decimal },
}

impl SettlementError {
    fn not_found(account_id: &str) -> Self {
        Self::NotFound {
            account_id: account_id.to_string(),
        }
    }

    fn invalid(reason: &str) -> Self {
        Self::InvalidOperation {
            reason: reason.to_string(),
        }
    }
}

impl From<AccountError> for SettlementError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InsufficientBalance {
                required,
                available,
            } => SettlementError::InsufficientFunds {
                required,
                available,
            },
        }
    }
}

/// Executes transfers and withdrawals against an `AccountStore`
///
/// Holds the conversion seam plus the injected id and wall-clock providers
/// used for transaction construction. The engine itself is stateless with
/// respect to accounts: every operation borrows the store for exactly one
/// call.
///
/// # Example
/// ```
/// use bank_ledger_core::{
///     Account, AccountStore, Currency, Money, RateTable, SettlementEngine,
/// };
/// use rust_decimal::Decimal;
///
/// let mut store = AccountStore::new(vec![
///     Account::checking("ACC_1", Money::new(Decimal::new(100, 0), Currency::Usd)),
///     Account::checking("ACC_2", Money::zero(Currency::Usd)),
/// ]);
/// let engine = SettlementEngine::new(Box::new(RateTable::new()));
///
/// let tx = engine
///     .transfer(&mut store, "ACC_1", "ACC_2", Money::new(Decimal::new(30, 0), Currency::Usd))
///     .unwrap();
///
/// assert_eq!(store.get("ACC_1").unwrap().balance().amount, Decimal::new(70, 0));
/// assert_eq!(store.get("ACC_2").unwrap().balance().amount, Decimal::new(30, 0));
/// assert_eq!(store.get("ACC_1").unwrap().transactions()[0].id(), tx.id());
/// assert_eq!(store.get("ACC_2").unwrap().transactions()[0].id(), tx.id());
/// ```
pub struct SettlementEngine {
    converter: Box<dyn CurrencyConverter>,
    ids: Box<dyn TransactionIdSource>,
    wall_clock: Box<dyn WallClock>,
}

impl SettlementEngine {
    /// Create an engine with production providers (UUID ids, system clock)
    pub fn new(converter: Box<dyn CurrencyConverter>) -> Self {
        Self {
            converter,
            ids: Box::new(UuidIdSource),
            wall_clock: Box::new(SystemWallClock),
        }
    }

    /// Create an engine with explicit providers (deterministic tests/demos)
    pub fn with_providers(
        converter: Box<dyn CurrencyConverter>,
        ids: Box<dyn TransactionIdSource>,
        wall_clock: Box<dyn WallClock>,
    ) -> Self {
        Self {
            converter,
            ids,
            wall_clock,
        }
    }

    /// Move `amount` from `source_id` to `dest_id`
    ///
    /// The requested amount may be denominated in any supported currency; it
    /// is converted into the source currency for the debit and into the
    /// destination currency for the credit and the shared record.
    ///
    /// # Errors
    ///
    /// - `InvalidOperation` - self-transfer, savings source, or non-positive
    ///   amount
    /// - `NotFound` - either account id is absent from the store
    /// - `InsufficientFunds` - the converted debit exceeds the source balance
    pub fn transfer(
        &self,
        store: &mut AccountStore,
        source_id: &str,
        dest_id: &str,
        amount: Money,
    ) -> Result<Transaction, SettlementError> {
        if source_id == dest_id {
            return Err(SettlementError::invalid(
                "cannot transfer between an account and itself",
            ));
        }

        let (source_currency, source_balance, source_is_savings) = match store.get(source_id) {
            Some(account) => (
                account.balance().currency,
                account.balance().amount,
                account.is_savings(),
            ),
            None => return Err(SettlementError::not_found(source_id)),
        };
        let dest_currency = match store.get(dest_id) {
            Some(account) => account.balance().currency,
            None => return Err(SettlementError::not_found(dest_id)),
        };

        if source_is_savings {
            return Err(SettlementError::invalid(
                "savings accounts cannot be the source of a transfer",
            ));
        }
        if amount.amount <= Decimal::ZERO {
            return Err(SettlementError::invalid("transfer amount must be positive"));
        }

        let deducted = self.converter.convert(&amount, source_currency);
        if source_balance < deducted.amount {
            return Err(SettlementError::InsufficientFunds {
                required: deducted.amount,
                available: source_balance,
            });
        }
        let added = self.converter.convert(&amount, dest_currency);

        // The record both histories share is denominated in the destination
        // currency.
        let transaction = Transaction::new(
            self.ids.next_id(),
            source_id.to_string(),
            dest_id.to_string(),
            added,
            self.wall_clock.now(),
        );

        // All validation passed; debit cannot fail past this point.
        {
            let source = store.get_mut(source_id).expect("existence checked above");
            source.debit(deducted.amount)?;
            source.record_transaction(transaction.clone());
        }
        {
            let dest = store.get_mut(dest_id).expect("existence checked above");
            dest.credit(added.amount);
            dest.record_transaction(transaction.clone());
        }

        debug!(
            id = transaction.id(),
            source = source_id,
            dest = dest_id,
            amount = %transaction.amount(),
            "transfer settled"
        );
        Ok(transaction)
    }

    /// Withdraw `amount` from `account_id`
    ///
    /// A request in a foreign currency is converted into the account's
    /// currency before any balance check; the caller's value is treated as an
    /// immutable input. The record references the account as both source and
    /// destination.
    ///
    /// # Errors
    ///
    /// - `NotFound` - the account id is absent from the store
    /// - `InvalidOperation` - non-positive amount
    /// - `InsufficientFunds` - the converted amount exceeds the balance
    pub fn withdraw(
        &self,
        store: &mut AccountStore,
        account_id: &str,
        amount: Money,
    ) -> Result<Transaction, SettlementError> {
        let (currency, balance) = match store.get(account_id) {
            Some(account) => (account.balance().currency, account.balance().amount),
            None => return Err(SettlementError::not_found(account_id)),
        };

        if amount.amount <= Decimal::ZERO {
            return Err(SettlementError::invalid(
                "withdrawal amount must be positive",
            ));
        }

        let settled = if amount.currency != currency {
            self.converter.convert(&amount, currency)
        } else {
            amount
        };
        if balance < settled.amount {
            return Err(SettlementError::InsufficientFunds {
                required: settled.amount,
                available: balance,
            });
        }

        let transaction = Transaction::new(
            self.ids.next_id(),
            account_id.to_string(),
            account_id.to_string(),
            settled,
            self.wall_clock.now(),
        );

        let account = store.get_mut(account_id).expect("existence checked above");
        account.debit(settled.amount)?;
        account.record_transaction(transaction.clone());

        debug!(
            id = transaction.id(),
            account = account_id,
            amount = %transaction.amount(),
            "withdrawal settled"
        );
        Ok(transaction)
    }

    /// Current balance of `account_id`
    ///
    /// Returns an owned snapshot, not a live view of the account.
    pub fn check_funds(
        &self,
        store: &AccountStore,
        account_id: &str,
    ) -> Result<Money, SettlementError> {
        match store.get(account_id) {
            Some(account) => Ok(account.balance()),
            None => Err(SettlementError::not_found(account_id)),
        }
    }

    /// Settlement history of `account_id`, in insertion order
    pub fn retrieve_transactions<'a>(
        &self,
        store: &'a AccountStore,
        account_id: &str,
    ) -> Result<&'a [Transaction], SettlementError> {
        match store.get(account_id) {
            Some(account) => Ok(account.transactions()),
            None => Err(SettlementError::not_found(account_id)),
        }
    }
}
