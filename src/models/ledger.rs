//! The in-memory ledger
//!
//! Maps category names to their budget, accumulated expenses and line items.
//! Categories keep the order in which they were added.

use super::category::Category;
use super::expense::ExpenseLineItem;
use super::money::Money;
use crate::error::{SpendbookError, SpendbookResult};

/// Result of recording an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseOutcome {
    /// Category the expense was recorded against
    pub category: String,
    /// Amount of the recorded expense
    pub amount: Money,
    /// Accumulated expenses after the addition
    pub total: Money,
    /// Budget of the category
    pub budget: Money,
    /// Whether the new total is strictly above the budget
    pub exceeded: bool,
}

impl ExpenseOutcome {
    pub fn remaining(&self) -> Money {
        self.budget - self.total
    }
}

/// A line item tagged with the category it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentExpense<'a> {
    pub category: &'a str,
    pub item: &'a ExpenseLineItem,
}

/// Budget figures for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    pub budget: Money,
    pub spent: Money,
    pub remaining: Money,
    pub expense_count: usize,
    pub over_budget: bool,
}

/// Budget figures for the whole ledger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub categories: Vec<CategorySummary>,
    pub total_budget: Money,
    pub total_spent: Money,
}

impl LedgerSummary {
    pub fn total_remaining(&self) -> Money {
        self.total_budget - self.total_spent
    }

    /// Number of categories currently over budget
    pub fn over_budget_count(&self) -> usize {
        self.categories.iter().filter(|c| c.over_budget).count()
    }
}

/// The full set of categories and their expense history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    categories: Vec<Category>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already-built category, rejecting duplicate names
    ///
    /// Used when loading from storage, where budgets and items are trusted.
    pub fn insert(&mut self, category: Category) -> SpendbookResult<()> {
        if self.contains(&category.name) {
            return Err(SpendbookError::duplicate_category(category.name));
        }
        self.categories.push(category);
        Ok(())
    }

    /// Add a new category with a zero balance
    ///
    /// The name is trimmed. Fails with a duplicate error if a category with
    /// that name exists, or a validation error for an empty name or a
    /// negative budget. On failure the ledger is unchanged.
    pub fn add_category(&mut self, name: &str, budget: Money) -> SpendbookResult<&Category> {
        let category = Category::new(name.trim(), budget);
        category
            .validate()
            .map_err(|e| SpendbookError::Validation(e.to_string()))?;

        self.insert(category)?;
        let index = self.categories.len() - 1;
        Ok(&self.categories[index])
    }

    /// Record an expense against a category
    ///
    /// Appends the line item and increments the running total. Going over
    /// budget is reported through [`ExpenseOutcome::exceeded`], not as an
    /// error: the expense is recorded either way.
    pub fn add_expense(
        &mut self,
        category_name: &str,
        amount: Money,
        description: &str,
    ) -> SpendbookResult<ExpenseOutcome> {
        let item = ExpenseLineItem::new(description.trim(), amount);
        item.validate()
            .map_err(|e| SpendbookError::Validation(e.to_string()))?;

        let category = self.get_mut(category_name)?;
        let total = category
            .record(item)
            .map_err(|e| SpendbookError::Validation(e.to_string()))?;

        Ok(ExpenseOutcome {
            category: category.name.clone(),
            amount,
            total,
            budget: category.budget,
            exceeded: category.is_over_budget(),
        })
    }

    /// Accumulated expenses of a category
    pub fn total_for(&self, category_name: &str) -> SpendbookResult<Money> {
        self.require(category_name).map(Category::spent)
    }

    /// Budget minus accumulated expenses of a category
    pub fn remaining_budget(&self, category_name: &str) -> SpendbookResult<Money> {
        self.require(category_name).map(Category::remaining)
    }

    /// Look up a category by name
    pub fn get(&self, name: &str) -> Option<&Category> {
        let name = name.trim();
        self.categories.iter().find(|c| c.name == name)
    }

    /// Look up a category by name, failing if it doesn't exist
    pub fn require(&self, name: &str) -> SpendbookResult<&Category> {
        self.get(name)
            .ok_or_else(|| SpendbookError::category_not_found(name.trim()))
    }

    fn get_mut(&mut self, name: &str) -> SpendbookResult<&mut Category> {
        let name = name.trim();
        self.categories
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| SpendbookError::category_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of line items across all categories
    pub fn expense_count(&self) -> usize {
        self.categories.iter().map(|c| c.items().len()).sum()
    }

    /// Line items across all categories in ledger order
    ///
    /// Categories in the order they were added, each category's items
    /// oldest first. The file stores no timestamps, so this is the only
    /// order that survives a reload. `limit` keeps the first entries.
    pub fn recent_expenses(&self, limit: Option<usize>) -> Vec<RecentExpense<'_>> {
        let all = self.categories.iter().flat_map(|c| {
            c.items().iter().map(move |item| RecentExpense {
                category: c.name.as_str(),
                item,
            })
        });

        match limit {
            Some(limit) => all.take(limit).collect(),
            None => all.collect(),
        }
    }

    /// Per-category budget figures plus grand totals
    pub fn summary(&self) -> LedgerSummary {
        let categories: Vec<CategorySummary> = self
            .categories
            .iter()
            .map(|c| CategorySummary {
                name: c.name.clone(),
                budget: c.budget,
                spent: c.spent(),
                remaining: c.remaining(),
                expense_count: c.items().len(),
                over_budget: c.is_over_budget(),
            })
            .collect();

        LedgerSummary {
            total_budget: categories.iter().map(|c| c.budget).sum(),
            total_spent: categories.iter().map(|c| c.spent).sum(),
            categories,
        }
    }
}
