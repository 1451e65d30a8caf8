//! Reports for Spendbook
//!
//! Terminal reports built from the ledger.

pub mod spending;

pub use spending::{CategorySpending, SpendingReport};
