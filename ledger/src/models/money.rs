//! Money and currency types
//!
//! Amounts are `rust_decimal::Decimal` (exact decimal arithmetic, serialized
//! as strings in JSON). The supported currency set is a closed enum so every
//! conversion pair is a compile-checked decision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currency codes (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Eur,
    Ron,
    Gbp,
}

impl Currency {
    /// The ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Ron => "RON",
            Currency::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An amount denominated in a currency
///
/// Value type: settlement operations produce new `Money` values rather than
/// mutating inputs in place.
///
/// # Example
/// ```
/// use bank_ledger_core::{Currency, Money};
/// use rust_decimal::Decimal;
///
/// let m = Money::new(Decimal::new(100_50, 2), Currency::Eur);
/// assert_eq!(m.to_string(), "100.50 EUR");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
