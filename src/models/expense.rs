//! Expense line items
//!
//! A line item is one recorded expense within a category. In the ledger file
//! it is stored as a single `"description: amount"` field.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Separator between description and amount in the ledger file
pub const LINE_ITEM_SEPARATOR: &str = ": ";

/// One recorded expense (description + amount) within a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLineItem {
    /// Free-text description
    pub description: String,

    /// Amount spent
    pub amount: Money,
}

impl ExpenseLineItem {
    /// Create a new line item
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }

    /// Validate the line item
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }

        Ok(())
    }

    /// Encode as a `"description: amount"` field
    pub fn to_field(&self) -> String {
        format!(
            "{}{}{}",
            self.description,
            LINE_ITEM_SEPARATOR,
            self.amount.to_plain_string()
        )
    }

    /// Decode a `"description: amount"` field
    ///
    /// Splits at the last separator so that descriptions may themselves
    /// contain `": "`.
    pub fn from_field(field: &str) -> Option<Self> {
        let (description, amount) = field.rsplit_once(LINE_ITEM_SEPARATOR)?;
        let amount = Money::parse_stored(amount).ok()?;
        Some(Self::new(description, amount))
    }
}

impl fmt::Display for ExpenseLineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.description, LINE_ITEM_SEPARATOR, self.amount)
    }
}

/// Validation errors for expense line items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NegativeAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_encoding() {
        let item = ExpenseLineItem::new("lunch", Money::from_cents(3000));
        assert_eq!(item.to_field(), "lunch: 30.00");
        assert_eq!(item.to_string(), "lunch: $30.00");
    }

    #[test]
    fn test_field_decoding_accepts_float_text() {
        let item = ExpenseLineItem::from_field("coffee: 4.5").unwrap();
        assert_eq!(item.description, "coffee");
        assert_eq!(item.amount, Money::from_cents(450));
    }

    #[test]
    fn test_description_with_separator() {
        let item = ExpenseLineItem::new("note: dinner", Money::from_cents(1234));
        let decoded = ExpenseLineItem::from_field(&item.to_field()).unwrap();
        assert_eq!(decoded, item);
    }

    #[test]
    fn test_malformed_fields() {
        assert!(ExpenseLineItem::from_field("no separator").is_none());
        assert!(ExpenseLineItem::from_field("lunch: thirty").is_none());

        let float_written = ExpenseLineItem::from_field("tip: 0.30000000000000004").unwrap();
        assert_eq!(float_written.amount.cents(), 30);
    }

    #[test]
    fn test_validation() {
        assert!(ExpenseLineItem::new("lunch", Money::from_cents(1)).validate().is_ok());
        assert!(ExpenseLineItem::new("free sample", Money::zero()).validate().is_ok());
        assert_eq!(
            ExpenseLineItem::new("  ", Money::from_cents(1)).validate(),
            Err(ExpenseValidationError::EmptyDescription)
        );
        assert_eq!(
            ExpenseLineItem::new("refund", Money::from_cents(-1)).validate(),
            Err(ExpenseValidationError::NegativeAmount)
        );
    }
}
