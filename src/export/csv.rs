//! CSV Export functionality
//!
//! Flattens every line item into one spreadsheet row.

use crate::error::{SpendbookError, SpendbookResult};
use crate::models::Ledger;
use std::io::Write;

/// Export all expenses as `Category,Description,Amount` rows
pub fn export_expenses_csv<W: Write>(ledger: &Ledger, writer: &mut W) -> SpendbookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Category", "Description", "Amount"])
        .map_err(|e| SpendbookError::Export(e.to_string()))?;

    for category in ledger.categories() {
        for item in category.items() {
            let amount = item.amount.to_plain_string();
            csv_writer
                .write_record([
                    category.name.as_str(),
                    item.description.as_str(),
                    amount.as_str(),
                ])
                .map_err(|e| SpendbookError::Export(e.to_string()))?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| SpendbookError::Export(e.to_string()))?;

    Ok(())
}
