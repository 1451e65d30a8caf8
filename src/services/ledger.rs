//! Ledger service
//!
//! Business logic for the bookkeeping operations. Every mutating call is a
//! full load-mutate-save cycle on the ledger file followed by an audit entry,
//! so the file always reflects the last completed action.

use crate::audit::EntityType;
use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{Category, ExpenseLineItem, ExpenseOutcome, Ledger, LedgerSummary, Money};
use crate::storage::Storage;

/// A change that reached the ledger file
///
/// The ledger is the source of truth, so a failed audit write does not undo
/// or fail the change. It is reported alongside the value instead.
#[derive(Debug)]
pub struct Saved<T> {
    pub value: T,
    /// Set when the audit entry for this change could not be written
    pub audit_error: Option<SpendbookError>,
}

impl<T> Saved<T> {
    fn new(value: T, audit: SpendbookResult<()>) -> Self {
        Self {
            value,
            audit_error: audit.err(),
        }
    }
}

/// Service for category and expense bookkeeping
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a category from raw user input
    ///
    /// The budget text is parsed before anything is loaded, so non-numeric
    /// input aborts the operation without touching the file.
    pub fn add_category(&self, name: &str, budget: &str) -> SpendbookResult<Saved<Category>> {
        let budget = parse_amount("budget", budget)?;

        let mut ledger = self.storage.load()?;
        let category = ledger.add_category(name, budget)?.clone();
        self.storage.save(&ledger)?;

        let audit = self.storage.log_create(
            EntityType::Category,
            category.name.clone(),
            None,
            &category,
        );

        Ok(Saved::new(category, audit))
    }

    /// Record an expense from raw user input
    ///
    /// Returns the outcome even when the category went over budget; the
    /// caller decides how to warn the user.
    pub fn add_expense(
        &self,
        category: &str,
        amount: &str,
        description: &str,
    ) -> SpendbookResult<Saved<ExpenseOutcome>> {
        let amount = parse_amount("expense", amount)?;

        let mut ledger = self.storage.load()?;
        let outcome = ledger.add_expense(category, amount, description)?;
        self.storage.save(&ledger)?;

        let item = ExpenseLineItem::new(description.trim(), amount);
        let mut summary = format!("total {} of budget {}", outcome.total, outcome.budget);
        if outcome.exceeded {
            summary.push_str(" (over budget)");
        }
        let audit = self.storage.log_record(
            EntityType::Expense,
            outcome.category.clone(),
            Some(item.description.clone()),
            &item,
            Some(summary),
        );

        Ok(Saved::new(outcome, audit))
    }

    /// Load the current ledger
    pub fn ledger(&self) -> SpendbookResult<Ledger> {
        self.storage.load()
    }

    /// Find a category by name
    pub fn find_category(&self, name: &str) -> SpendbookResult<Category> {
        self.storage.load()?.require(name).cloned()
    }

    /// Accumulated expenses of a category
    pub fn total_for(&self, name: &str) -> SpendbookResult<Money> {
        self.storage.load()?.total_for(name)
    }

    /// Budget minus accumulated expenses of a category
    pub fn remaining_budget(&self, name: &str) -> SpendbookResult<Money> {
        self.storage.load()?.remaining_budget(name)
    }

    /// Budget figures for every category
    pub fn summary(&self) -> SpendbookResult<LedgerSummary> {
        Ok(self.storage.load()?.summary())
    }
}

/// Parse a user-entered amount, reporting non-numeric input as a validation error
fn parse_amount(what: &str, input: &str) -> SpendbookResult<Money> {
    Money::parse(input).map_err(|e| {
        SpendbookError::Validation(format!("Please enter a valid {} amount. {}", what, e))
    })
}
