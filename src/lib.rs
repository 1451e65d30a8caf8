//! Spendbook - category budgets and expense tracking from the command line
//!
//! This library provides the core functionality for the Spendbook ledger.
//! Each category has a budget and a running list of expenses; recording an
//! expense updates the category total and reports when the budget is
//! exceeded. The ledger is persisted to a single delimited file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, line items, the ledger)
//! - `storage`: Delimited ledger file and audit log storage
//! - `services`: Business logic layer (parse, mutate, persist)
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `reports`: Spending report
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use spendbook::models::{Ledger, Money};
//!
//! let mut ledger = Ledger::new();
//! ledger.add_category("Food", Money::from_cents(10000)).unwrap();
//! let outcome = ledger
//!     .add_expense("Food", Money::from_cents(11000), "groceries")
//!     .unwrap();
//! assert!(outcome.exceeded);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendbookError, SpendbookResult};
