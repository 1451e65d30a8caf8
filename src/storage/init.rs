//! Storage initialization
//!
//! Handles first-run setup

use crate::config::paths::SpendbookPaths;
use crate::error::SpendbookError;
use crate::models::Ledger;

use super::ledger_file::LedgerFile;

/// Initialize storage for a fresh installation
///
/// Creates the directories and an empty ledger file. An existing ledger file
/// is left untouched.
pub fn initialize_storage(paths: &SpendbookPaths) -> Result<(), SpendbookError> {
    paths.ensure_directories()?;

    let ledger_file = LedgerFile::new(paths.ledger_file());
    if !ledger_file.exists() {
        ledger_file.save(&Ledger::new())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_empty_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        assert!(paths.ledger_file().exists());
        assert!(LedgerFile::new(paths.ledger_file()).load().unwrap().is_empty());
    }

    #[test]
    fn test_initialize_keeps_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let file = LedgerFile::new(paths.ledger_file());

        let mut ledger = Ledger::new();
        ledger.add_category("Food", Money::from_cents(100)).unwrap();
        file.save(&ledger).unwrap();

        initialize_storage(&paths).unwrap();
        assert_eq!(file.load().unwrap().len(), 1);
    }
}
