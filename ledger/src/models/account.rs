//! Account model
//!
//! An account has an identity, a kind, a balance, and an append-only
//! transaction history. Only savings accounts carry interest terms; only
//! non-savings accounts may act as a transfer source (enforced by the
//! settlement engine).

use crate::core::clock::add_months;
use crate::models::money::Money;
use crate::models::transaction::Transaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during account-level balance operations
#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: Decimal, available: Decimal },
}

/// How often a savings account capitalizes interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapitalizationFrequency {
    Monthly,
    Quarterly,
}

impl CapitalizationFrequency {
    /// Length of one accrual period in calendar months
    pub fn period_months(&self) -> u32 {
        match self {
            CapitalizationFrequency::Monthly => 1,
            CapitalizationFrequency::Quarterly => 3,
        }
    }
}

/// Interest terms attached to a savings account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsTerms {
    /// Fractional rate per accrual period (0.05 = 5% per period)
    pub interest_rate: Decimal,

    /// Accrual period length
    pub frequency: CapitalizationFrequency,

    /// Date interest was last applied; only ever moves forward
    pub last_interest_applied: NaiveDate,
}

impl SavingsTerms {
    pub fn new(
        interest_rate: Decimal,
        frequency: CapitalizationFrequency,
        last_interest_applied: NaiveDate,
    ) -> Self {
        Self {
            interest_rate,
            frequency,
            last_interest_applied,
        }
    }

    /// The date this account is next due for interest
    pub fn next_due_date(&self) -> NaiveDate {
        add_months(self.last_interest_applied, self.frequency.period_months())
    }
}

/// Account kind
///
/// Savings accounts carry their interest terms in the variant, so code that
/// accrues interest cannot forget to handle them and code that handles
/// checking accounts cannot reach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    Checking,
    Savings(SavingsTerms),
}

/// A ledger account
///
/// # Example
/// ```
/// use bank_ledger_core::{Account, Currency, Money};
/// use rust_decimal::Decimal;
///
/// let mut account = Account::checking(
///     "ACC_1",
///     Money::new(Decimal::new(500_00, 2), Currency::Usd),
/// );
/// assert_eq!(account.balance().amount, Decimal::new(500_00, 2));
///
/// account.debit(Decimal::new(200_00, 2)).unwrap();
/// assert_eq!(account.balance().amount, Decimal::new(300_00, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier
    id: String,

    /// Checking or savings (with interest terms)
    kind: AccountKind,

    /// Current balance
    balance: Money,

    /// Append-only settlement history, insertion order
    transactions: Vec<Transaction>,
}

impl Account {
    /// Create a checking account
    pub fn checking(id: impl Into<String>, balance: Money) -> Self {
        Self {
            id: id.into(),
            kind: AccountKind::Checking,
            balance,
            transactions: Vec::new(),
        }
    }

    /// Create a savings account with the given interest terms
    pub fn savings(id: impl Into<String>, balance: Money, terms: SavingsTerms) -> Self {
        Self {
            id: id.into(),
            kind: AccountKind::Savings(terms),
            balance,
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Settlement history in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn is_savings(&self) -> bool {
        matches!(self.kind, AccountKind::Savings(_))
    }

    /// Interest terms, if this is a savings account
    pub fn savings_terms(&self) -> Option<&SavingsTerms> {
        match &self.kind {
            AccountKind::Savings(terms) => Some(terms),
            AccountKind::Checking => None,
        }
    }

    /// Whether the balance covers a debit of `amount`
    pub fn can_cover(&self, amount: Decimal) -> bool {
        self.balance.amount >= amount
    }

    /// Debit the balance
    ///
    /// Fails without mutating if the balance does not cover the amount, so a
    /// debit can never push the balance negative.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if !self.can_cover(amount) {
            return Err(AccountError::InsufficientBalance {
                required: amount,
                available: self.balance.amount,
            });
        }
        self.balance.amount -= amount;
        Ok(())
    }

    /// Credit the balance
    pub fn credit(&mut self, amount: Decimal) {
        self.balance.amount += amount;
    }

    /// Append a settlement record to the history
    pub fn record_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Capitalize one period of interest and mark it applied as of `applied_on`
    ///
    /// No-op on checking accounts. The balance grows by `balance * rate` in
    /// its own currency; no conversion is involved.
    pub(crate) fn apply_interest(&mut self, applied_on: NaiveDate) {
        let AccountKind::Savings(terms) = &mut self.kind else {
            return;
        };
        self.balance.amount += self.balance.amount * terms.interest_rate;
        terms.last_interest_applied = applied_on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::money::Currency;
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
    }

    fn savings_account(balance: Decimal, rate: Decimal) -> Account {
        Account::savings(
            "SAV_1",
            Money::new(balance, Currency::Usd),
            SavingsTerms::new(rate, CapitalizationFrequency::Monthly, ymd(2024, 1, 15)),
        )
    }

    #[test]
    fn test_debit_insufficient_balance() {
        let mut account = Account::checking("ACC_1", Money::new(dec!(50), Currency::Usd));

        let result = account.debit(dec!(50.01));

        assert_eq!(
            result,
            Err(AccountError::InsufficientBalance {
                required: dec!(50.01),
                available: dec!(50),
            })
        );
        assert_eq!(account.balance().amount, dec!(50)); // Unchanged
    }

    #[test]
    fn test_debit_exact_balance() {
        let mut account = Account::checking("ACC_1", Money::new(dec!(50), Currency::Usd));
        account.debit(dec!(50)).unwrap();
        assert_eq!(account.balance().amount, Decimal::ZERO);
    }

    #[test]
    fn test_credit() {
        let mut account = Account::checking("ACC_1", Money::zero(Currency::Eur));
        account.credit(dec!(12.34));
        assert_eq!(account.balance().amount, dec!(12.34));
    }

    #[test]
    fn test_history_preserves_insertion_order() {
        let mut account = Account::checking("ACC_1", Money::zero(Currency::Usd));
        for n in 1..=3 {
            account.record_transaction(Transaction::new(
                format!("TX-{n}"),
                "ACC_1".to_string(),
                "ACC_1".to_string(),
                Money::zero(Currency::Usd),
                instant(),
            ));
        }

        let ids: Vec<&str> = account.transactions().iter().map(|tx| tx.id()).collect();
        assert_eq!(ids, vec!["TX-1", "TX-2", "TX-3"]);
    }

    #[test]
    fn test_apply_interest_compounds_on_balance() {
        let mut account = savings_account(dec!(100), dec!(0.05));

        account.apply_interest(ymd(2024, 2, 15));

        assert_eq!(account.balance().amount, dec!(105.00));
        assert_eq!(
            account.savings_terms().unwrap().last_interest_applied,
            ymd(2024, 2, 15)
        );
    }

    #[test]
    fn test_apply_interest_ignores_checking() {
        let mut account = Account::checking("ACC_1", Money::new(dec!(100), Currency::Usd));
        account.apply_interest(ymd(2024, 2, 15));
        assert_eq!(account.balance().amount, dec!(100));
    }

    #[test]
    fn test_quarterly_due_date() {
        let terms = SavingsTerms::new(
            dec!(0.05),
            CapitalizationFrequency::Quarterly,
            ymd(2024, 1, 15),
        );
        assert_eq!(terms.next_due_date(), ymd(2024, 4, 15));
    }

    #[test]
    fn test_monthly_due_date_clamps() {
        let terms = SavingsTerms::new(
            dec!(0.05),
            CapitalizationFrequency::Monthly,
            ymd(2024, 1, 31),
        );
        assert_eq!(terms.next_due_date(), ymd(2024, 2, 29));
    }
}
