//! Core data models for Spendbook
//!
//! This module contains the data structures that represent the bookkeeping
//! domain: money amounts, categories, expense line items and the ledger.

pub mod category;
pub mod expense;
pub mod ledger;
pub mod money;

pub use category::{Category, CategoryValidationError};
pub use expense::{ExpenseLineItem, ExpenseValidationError};
pub use ledger::{CategorySummary, ExpenseOutcome, Ledger, LedgerSummary, RecentExpense};
pub use money::{Money, MoneyParseError};
