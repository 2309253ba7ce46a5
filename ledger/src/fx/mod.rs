//! Currency conversion
//!
//! The settlement engine never knows rates; it goes through the
//! `CurrencyConverter` seam. Conversion is pure and deterministic - same
//! input, same output, no side effects on the input value.

use crate::models::money::{Currency, Money};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Pure conversion of an amount into a target currency
pub trait CurrencyConverter {
    /// Convert `value` into `target`
    ///
    /// Converting into the value's own currency is the identity.
    fn convert(&self, value: &Money, target: Currency) -> Money;
}

/// Converter backed by an explicit table of per-direction rates
///
/// Rates are configuration: an unregistered pair is a setup bug, not a
/// runtime condition, so lookup panics rather than returning an error.
///
/// # Example
/// ```
/// use bank_ledger_core::{Currency, CurrencyConverter, Money, RateTable};
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::new()
///     .with_rate(Currency::Eur, Currency::Usd, Decimal::new(110, 2)); // 1 EUR = 1.10 USD
///
/// let eur = Money::new(Decimal::new(10_00, 2), Currency::Eur);
/// let usd = rates.convert(&eur, Currency::Usd);
/// assert_eq!(usd.amount, Decimal::new(11_00, 2));
/// assert_eq!(usd.currency, Currency::Usd);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<(Currency, Currency), Decimal>,
}

impl RateTable {
    /// Create an empty table (same-currency conversion only)
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rate for one direction
    pub fn set_rate(&mut self, from: Currency, to: Currency, rate: Decimal) {
        self.rates.insert((from, to), rate);
    }

    /// Builder-style `set_rate`
    pub fn with_rate(mut self, from: Currency, to: Currency, rate: Decimal) -> Self {
        self.set_rate(from, to, rate);
        self
    }

    /// Look up the registered rate for a direction
    pub fn rate(&self, from: Currency, to: Currency) -> Option<Decimal> {
        self.rates.get(&(from, to)).copied()
    }
}

impl CurrencyConverter for RateTable {
    fn convert(&self, value: &Money, target: Currency) -> Money {
        if value.currency == target {
            return *value;
        }
        let rate = self
            .rate(value.currency, target)
            .unwrap_or_else(|| panic!("no conversion rate registered: {} -> {}", value.currency, target));
        Money::new(value.amount * rate, target)
    }
}
