//! Transaction record
//!
//! An immutable record of a completed settlement operation. Created solely by
//! the settlement engine as the result of a successful transfer or
//! withdrawal; never edited or removed afterwards.
//!
//! The amount is denominated in the destination account's currency - for a
//! cross-currency transfer both accounts' histories carry the same record,
//! already converted.

use crate::models::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable settlement record
///
/// For a withdrawal, `from` equals `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier
    id: String,

    /// Source account id
    from: String,

    /// Destination account id
    to: String,

    /// Settled amount, in the destination account's currency
    amount: Money,

    /// Real-time creation instant (wall clock, not the simulated clock)
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a new record
    ///
    /// Id and timestamp come from the engine's injected providers.
    pub fn new(
        id: String,
        from: String,
        to: String,
        amount: Money,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            from,
            to,
            amount,
            timestamp,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// A withdrawal debits and references a single account
    pub fn is_withdrawal(&self) -> bool {
        self.from == self.to
    }
}
