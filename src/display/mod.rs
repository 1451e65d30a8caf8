//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod category;
pub mod report;

pub use category::{
    format_audit_warning, format_budget_warning, format_category_details, format_category_list,
    format_recent_expenses,
};
