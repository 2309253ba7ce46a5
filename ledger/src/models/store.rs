//! Account store
//!
//! The single shared mutable structure of the ledger. The store owns every
//! `Account`; the accrual scheduler and the settlement engine borrow it for
//! the duration of exactly one operation and never retain account references
//! across calls.
//!
//! Account creation and destruction are a caller concern - the engines only
//! read and mutate records that already exist here.

use crate::models::account::Account;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Owner of all account records, indexed by id
///
/// # Example
/// ```
/// use bank_ledger_core::{Account, AccountStore, Currency, Money};
///
/// let store = AccountStore::new(vec![
///     Account::checking("ACC_1", Money::zero(Currency::Usd)),
///     Account::checking("ACC_2", Money::zero(Currency::Eur)),
/// ]);
///
/// assert_eq!(store.len(), 2);
/// assert!(store.exists("ACC_1"));
/// assert!(!store.exists("ACC_3"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountStore {
    accounts: HashMap<String, Account>,
}

impl AccountStore {
    /// Create a store holding the given accounts
    ///
    /// # Panics
    /// Panics if two accounts share an id.
    pub fn new(accounts: Vec<Account>) -> Self {
        let mut store = Self {
            accounts: HashMap::with_capacity(accounts.len()),
        };
        for account in accounts {
            store.insert(account);
        }
        store
    }

    /// Add an account
    ///
    /// # Panics
    /// Panics if the id is already present.
    pub fn insert(&mut self, account: Account) {
        let id = account.id().to_string();
        assert!(
            !self.accounts.contains_key(&id),
            "account id {} already exists",
            id
        );
        self.accounts.insert(id, account);
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    /// All accounts, keyed by id
    pub fn accounts(&self) -> &HashMap<String, Account> {
        &self.accounts
    }

    /// Mutable view of all accounts, for a single sweep
    pub fn accounts_mut(&mut self) -> &mut HashMap<String, Account> {
        &mut self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::money::{Currency, Money};

    #[test]
    fn test_new_and_lookup() {
        let store = AccountStore::new(vec![
            Account::checking("A", Money::zero(Currency::Usd)),
            Account::checking("B", Money::zero(Currency::Usd)),
        ]);

        assert_eq!(store.len(), 2);
        assert!(store.get("A").is_some());
        assert!(store.get("C").is_none());
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_duplicate_id_panics() {
        AccountStore::new(vec![
            Account::checking("A", Money::zero(Currency::Usd)),
            Account::checking("A", Money::zero(Currency::Eur)),
        ]);
    }

    #[test]
    fn test_get_mut_allows_in_place_mutation() {
        let mut store = AccountStore::new(vec![Account::checking(
            "A",
            Money::zero(Currency::Usd),
        )]);

        store.get_mut("A").unwrap().credit(rust_decimal::Decimal::ONE);

        assert_eq!(store.get("A").unwrap().balance().amount, rust_decimal::Decimal::ONE);
    }
}
