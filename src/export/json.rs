//! JSON Export functionality
//!
//! Exports the complete ledger to JSON format with schema versioning.

use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{Category, Ledger, Money};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All categories with their line items
    pub categories: Vec<Category>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub category_count: usize,
    pub expense_count: usize,
    pub total_budget: Money,
    pub total_spent: Money,
}

impl FullExport {
    /// Create a new full export from a ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let summary = ledger.summary();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            categories: ledger.categories().to_vec(),
            metadata: ExportMetadata {
                category_count: ledger.len(),
                expense_count: ledger.expense_count(),
                total_budget: summary.total_budget,
                total_spent: summary.total_spent,
            },
        }
    }
}

/// Export the full ledger to pretty-printed JSON
pub fn export_full_json<W: Write>(ledger: &Ledger, writer: &mut W) -> SpendbookResult<()> {
    let export = FullExport::from_ledger(ledger);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| SpendbookError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SpendbookError::Export(e.to_string()))?;

    Ok(())
}
