//! Report, export and history commands

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::settings::Settings;
use crate::error::{SpendbookError, SpendbookResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::models::Ledger;
use crate::reports::SpendingReport;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
    /// CSV format (one row per expense)
    Csv,
}

/// Print the spending report, optionally with every line item
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    detailed: bool,
) -> SpendbookResult<()> {
    let ledger = LedgerService::new(storage).ledger()?;
    let report = SpendingReport::generate(&ledger);
    print!(
        "{}",
        report.format_terminal(settings.chart_width, &settings.currency_symbol, detailed)
    );
    Ok(())
}

/// Export the ledger to a file, or stdout when no output path is given
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> SpendbookResult<()> {
    let ledger = LedgerService::new(storage).ledger()?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                SpendbookError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&ledger, format, &mut writer)?;
            writer.flush()?;

            match format {
                ExportFormat::Csv => println!(
                    "Exported {} expenses to: {}",
                    ledger.expense_count(),
                    path.display()
                ),
                _ => println!(
                    "Exported {} categories to: {}",
                    ledger.len(),
                    path.display()
                ),
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(&ledger, format, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    ledger: &Ledger,
    format: ExportFormat,
    writer: &mut W,
) -> SpendbookResult<()> {
    match format {
        ExportFormat::Json => export_full_json(ledger, writer),
        ExportFormat::Yaml => export_full_yaml(ledger, writer),
        ExportFormat::Csv => export_expenses_csv(ledger, writer),
    }
}

/// Print the most recent audit log entries, oldest first
pub fn handle_history_command(storage: &Storage, limit: usize) -> SpendbookResult<()> {
    let entries = storage.audit.read_recent(limit)?;

    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
