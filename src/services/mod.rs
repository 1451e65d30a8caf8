//! Service layer for Spendbook
//!
//! The service layer provides business logic on top of the storage layer,
//! handling input parsing, persistence and audit logging.

pub mod ledger;

pub use ledger::{LedgerService, Saved};
