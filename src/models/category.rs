//! Category model
//!
//! A category is a named spending bucket with a budget ceiling and the
//! ordered list of expenses recorded against it.

use serde::Serialize;
use std::fmt;

use super::expense::ExpenseLineItem;
use super::money::Money;

/// Maximum length of a category name
pub const MAX_NAME_LEN: usize = 50;

/// A budget category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Category name, unique within a ledger
    pub name: String,

    /// Budget ceiling
    pub budget: Money,

    /// Accumulated expenses; always the sum of `items`
    spent: Money,

    /// Recorded expenses in the order they were added
    items: Vec<ExpenseLineItem>,
}

impl Category {
    /// Create a new category with no expenses
    pub fn new(name: impl Into<String>, budget: Money) -> Self {
        Self {
            name: name.into(),
            budget,
            spent: Money::zero(),
            items: Vec::new(),
        }
    }

    /// Create a category from previously recorded line items
    pub fn with_items(
        name: impl Into<String>,
        budget: Money,
        items: Vec<ExpenseLineItem>,
    ) -> Result<Self, CategoryValidationError> {
        let spent = items
            .iter()
            .try_fold(Money::zero(), |acc, i| acc.checked_add(i.amount))
            .ok_or(CategoryValidationError::TotalOverflow)?;

        Ok(Self {
            name: name.into(),
            budget,
            spent,
            items,
        })
    }

    /// Append a line item and return the new accumulated total
    ///
    /// Fails without changing the category if the total would overflow.
    pub fn record(&mut self, item: ExpenseLineItem) -> Result<Money, CategoryValidationError> {
        self.spent = self
            .spent
            .checked_add(item.amount)
            .ok_or(CategoryValidationError::TotalOverflow)?;
        self.items.push(item);
        Ok(self.spent)
    }

    /// Accumulated expenses
    pub fn spent(&self) -> Money {
        self.spent
    }

    /// Budget minus accumulated expenses (negative when overspent)
    pub fn remaining(&self) -> Money {
        self.budget - self.spent
    }

    /// Whether accumulated expenses are strictly above the budget
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }

    /// Recorded line items, oldest first
    pub fn items(&self) -> &[ExpenseLineItem] {
        &self.items
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(self.name.chars().count()));
        }

        if self.budget.is_negative() {
            return Err(CategoryValidationError::NegativeBudget);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeBudget,
    TotalOverflow,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::NegativeBudget => write!(f, "Budget cannot be negative"),
            Self::TotalOverflow => {
                write!(f, "Accumulated expenses exceed the largest supported amount")
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
