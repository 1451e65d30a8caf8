//! YAML Export functionality
//!
//! Exports the complete ledger to YAML format for human-readable backup.

use crate::error::{SpendbookError, SpendbookResult};
use crate::export::json::FullExport;
use crate::models::Ledger;
use std::io::Write;

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> SpendbookResult<()> {
    let export = FullExport::from_ledger(ledger);

    writeln!(writer, "# Spendbook Ledger Export")
        .map_err(|e| SpendbookError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| SpendbookError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| SpendbookError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SpendbookError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SpendbookError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_export_yaml() {
        let mut ledger = Ledger::new();
        ledger.add_category("Rent", Money::from_cents(90000)).unwrap();
        ledger
            .add_expense("Rent", Money::from_cents(90000), "march")
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&ledger, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Spendbook Ledger Export"));

        let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(value["categories"][0]["name"].as_str(), Some("Rent"));
        assert_eq!(value["metadata"]["total_spent"].as_i64(), Some(90000));
    }
}
