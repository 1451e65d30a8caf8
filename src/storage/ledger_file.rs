//! Ledger persistence in the delimited text format
//!
//! One row per category:
//!
//! ```text
//! name,budget,accumulated_expenses,description1: amount1,description2: amount2,...
//! ```
//!
//! Two-field `name,budget` rows from the earliest files load with no
//! expenses. Amounts written as binary floats (`30.0`, `1e+16`) are rounded
//! to the cent on load.
//!
//! Rows go through the `csv` crate, so names and descriptions containing
//! commas or quotes are quoted rather than breaking the row.

use std::path::PathBuf;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{Category, ExpenseLineItem, Ledger, Money};

use super::file_io::write_atomic;

/// Description given to a total that was recorded without line items
pub const CARRIED_OVER: &str = "Carried over";

/// Loads and saves the whole ledger as one file
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the ledger, or an empty ledger if the file doesn't exist
    pub fn load(&self) -> SpendbookResult<Ledger> {
        if !self.path.exists() {
            return Ok(Ledger::new());
        }

        let contents = std::fs::read(&self.path).map_err(|e| {
            SpendbookError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        parse_ledger(&contents)
            .map_err(|e| SpendbookError::Storage(format!("{}: {}", self.path.display(), e)))
    }

    /// Overwrite the file with a full snapshot of the ledger
    pub fn save(&self, ledger: &Ledger) -> SpendbookResult<()> {
        let contents = render_ledger(ledger)?;
        write_atomic(&self.path, &contents)
    }
}

/// Parse the ledger file contents
pub fn parse_ledger(contents: &[u8]) -> Result<Ledger, String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(contents);

    let mut ledger = Ledger::new();
    for result in reader.records() {
        let record = result.map_err(|e| e.to_string())?;
        let line = record.position().map_or(0, |p| p.line());
        let category = parse_row(&record).map_err(|e| format!("line {}: {}", line, e))?;

        ledger
            .insert(category)
            .map_err(|e| format!("line {}: {}", line, e))?;
    }

    Ok(ledger)
}

fn parse_row(record: &StringRecord) -> Result<Category, String> {
    if record.len() < 2 {
        return Err(format!(
            "expected 'name,budget[,total[,description: amount...]]', found {} field(s)",
            record.len()
        ));
    }

    let name = &record[0];
    let budget = Money::parse_stored(&record[1])
        .map_err(|e| format!("invalid budget for '{}': {}", name, e))?;
    let total = match record.get(2) {
        Some(field) => Money::parse_stored(field)
            .map_err(|e| format!("invalid total for '{}': {}", name, e))?,
        None => Money::zero(),
    };

    let mut items = record
        .iter()
        .skip(3)
        .map(|field| {
            ExpenseLineItem::from_field(field)
                .ok_or_else(|| format!("invalid expense '{}' in '{}'", field, name))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Totals written without any line items become a single item
    if items.is_empty() && !total.is_zero() {
        items.push(ExpenseLineItem::new(CARRIED_OVER, total));
    }

    Category::with_items(name, budget, items).map_err(|e| format!("'{}': {}", name, e))
}

/// Render the ledger to file contents
pub fn render_ledger(ledger: &Ledger) -> SpendbookResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(Vec::new());

    for category in ledger.categories() {
        let mut row = vec![
            category.name.clone(),
            category.budget.to_plain_string(),
            category.spent().to_plain_string(),
        ];
        row.extend(category.items().iter().map(ExpenseLineItem::to_field));
        writer.write_record(&row)?;
    }

    writer
        .into_inner()
        .map_err(|e| SpendbookError::Storage(format!("Failed to flush ledger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_file() -> (TempDir, LedgerFile) {
        let temp_dir = TempDir::new().unwrap();
        let file = LedgerFile::new(temp_dir.path().join("categories_expenses.csv"));
        (temp_dir, file)
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_category("Food", Money::from_cents(10000)).unwrap();
        ledger.add_category("Rent", Money::from_cents(120000)).unwrap();
        ledger
            .add_expense("Food", Money::from_cents(3000), "lunch")
            .unwrap();
        ledger
            .add_expense("Food", Money::from_cents(8000), "dinner")
            .unwrap();
        ledger
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_temp_dir, file) = create_test_file();
        assert!(!file.exists());
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn test_render_format() {
        let rendered = String::from_utf8(render_ledger(&sample_ledger()).unwrap()).unwrap();
        assert_eq!(
            rendered,
            "Food,100.00,110.00,lunch: 30.00,dinner: 80.00\nRent,1200.00,0.00\n"
        );
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, file) = create_test_file();
        let ledger = sample_ledger();

        file.save(&ledger).unwrap();
        let reloaded = file.load().unwrap();

        assert_eq!(reloaded, ledger);
        let food = reloaded.get("Food").unwrap();
        assert_eq!(food.budget, Money::from_cents(10000));
        assert_eq!(food.spent(), Money::from_cents(11000));
        assert_eq!(food.items().len(), 2);
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let (_temp_dir, file) = create_test_file();
        file.save(&sample_ledger()).unwrap();
        file.save(&Ledger::new()).unwrap();
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn test_commas_in_text_round_trip() {
        let (_temp_dir, file) = create_test_file();
        let mut ledger = Ledger::new();
        ledger
            .add_category("Food, drink", Money::from_cents(5000))
            .unwrap();
        ledger
            .add_expense("Food, drink", Money::from_cents(1299), "pizza, \"large\"")
            .unwrap();

        file.save(&ledger).unwrap();
        assert_eq!(file.load().unwrap(), ledger);
    }

    #[test]
    fn test_reads_float_formatted_rows() {
        let ledger = parse_ledger(b"Food,100.0,110.0,lunch: 30.0,dinner: 80.0\n").unwrap();
        let food = ledger.get("Food").unwrap();
        assert_eq!(food.budget.cents(), 10000);
        assert_eq!(food.spent().cents(), 11000);
        assert_eq!(food.items()[0].description, "lunch");
    }

    #[test]
    fn test_total_without_items_is_carried_over() {
        let ledger = parse_ledger(b"Gas,50.0,20.5\nBooks,30.0,0.0\n").unwrap();

        let gas = ledger.get("Gas").unwrap();
        assert_eq!(gas.spent().cents(), 2050);
        assert_eq!(gas.items().len(), 1);
        assert_eq!(gas.items()[0].description, CARRIED_OVER);

        assert!(ledger.get("Books").unwrap().items().is_empty());
    }

    #[test]
    fn test_preserves_row_order() {
        let ledger = parse_ledger(b"Zeta,1,0\nAlpha,1,0\nMid,1,0\n").unwrap();
        let names: Vec<_> = ledger.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_reads_two_field_rows() {
        let ledger = parse_ledger(b"Food,100.0\nRent,1200\n").unwrap();
        assert_eq!(ledger.len(), 2);

        let food = ledger.get("Food").unwrap();
        assert_eq!(food.budget.cents(), 10000);
        assert!(food.spent().is_zero());
        assert!(food.items().is_empty());
    }

    #[test]
    fn test_reads_exponent_and_long_float_amounts() {
        let ledger =
            parse_ledger(b"Savings,1e+16,0.30000000000000004,tip: 0.30000000000000004\n").unwrap();
        let savings = ledger.get("Savings").unwrap();
        assert_eq!(savings.budget.cents(), 1_000_000_000_000_000_000);
        assert_eq!(savings.spent().cents(), 30);
    }

    #[test]
    fn test_malformed_rows_are_errors() {
        let err = parse_ledger(b"Food\n").unwrap_err();
        assert!(err.contains("line 1"));
        assert!(err.contains("name,budget"));
        assert!(parse_ledger(b"Food,lots,0\n").is_err());
        assert!(parse_ledger(b"Food,100,5,lunch\n").is_err());
        assert!(parse_ledger(b"Food,1,0\nFood,2,0\n")
            .unwrap_err()
            .contains("line 2"));
    }

    #[test]
    fn test_corrupt_file_reports_path() {
        let (_temp_dir, file) = create_test_file();
        std::fs::write(file.path(), "Food,abc,0\n").unwrap();

        let err = file.load().unwrap_err();
        assert!(matches!(err, SpendbookError::Storage(_)));
        assert!(err.to_string().contains("categories_expenses.csv"));
    }
}
