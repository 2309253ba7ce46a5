//! Domain models for the ledger core

pub mod account;
pub mod money;
pub mod store;
pub mod transaction;
