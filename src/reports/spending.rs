//! Spending Report
//!
//! Charts accumulated expenses per category against each category's budget.

use crate::display::report::{format_bar, format_percentage, separator, truncate};
use crate::models::{ExpenseLineItem, Ledger, Money};

const NAME_WIDTH: usize = 20;
const ITEM_INDENT: usize = 2;

/// Spending figures for one category
#[derive(Debug, Clone)]
pub struct CategorySpending {
    pub category_name: String,
    pub budget: Money,
    pub spent: Money,
    pub expense_count: usize,
    /// Share of the budget used; `None` when the budget is zero
    pub budget_used: Option<f64>,
    pub over_budget: bool,
    /// Line items, oldest first
    pub items: Vec<ExpenseLineItem>,
}

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// One row per category, in ledger order
    pub categories: Vec<CategorySpending>,
    pub total_budget: Money,
    pub total_spent: Money,
    pub total_expenses: usize,
}

impl SpendingReport {
    /// Build the report from a ledger
    pub fn generate(ledger: &Ledger) -> Self {
        let categories: Vec<CategorySpending> = ledger
            .categories()
            .iter()
            .map(|c| {
                let budget_used = if c.budget.is_zero() {
                    None
                } else {
                    Some(c.spent().as_f64() / c.budget.as_f64() * 100.0)
                };

                CategorySpending {
                    category_name: c.name.clone(),
                    budget: c.budget,
                    spent: c.spent(),
                    expense_count: c.items().len(),
                    budget_used,
                    over_budget: c.is_over_budget(),
                    items: c.items().to_vec(),
                }
            })
            .collect();

        Self {
            total_budget: categories.iter().map(|c| c.budget).sum(),
            total_spent: categories.iter().map(|c| c.spent).sum(),
            total_expenses: categories.iter().map(|c| c.expense_count).sum(),
            categories,
        }
    }

    /// Largest amount spent in any one category
    pub fn max_spent(&self) -> Money {
        self.categories
            .iter()
            .map(|c| c.spent)
            .max()
            .unwrap_or_default()
    }

    /// Format the report as a horizontal bar chart
    ///
    /// Bars are scaled against the category with the most spending. With
    /// `detailed`, each category's line items follow its bar on the same
    /// scale.
    pub fn format_terminal(&self, bar_width: usize, symbol: &str, detailed: bool) -> String {
        let mut output = String::new();

        output.push_str("Expenses by Category\n");
        let line_width = NAME_WIDTH + bar_width + 34;
        output.push_str(&separator(line_width));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No categories found.\n");
            return output;
        }

        let max = self.max_spent().as_f64();
        for row in &self.categories {
            let used = match row.budget_used {
                Some(pct) => format_percentage(pct),
                None if row.spent.is_zero() => "-".to_string(),
                None => "n/a".to_string(),
            };
            let flag = if row.over_budget { " !" } else { "" };

            output.push_str(&format!(
                "{:<name$} {} {:>12} {:>8} of budget{}\n",
                truncate(&row.category_name, NAME_WIDTH),
                format_bar(row.spent.as_f64(), max, bar_width),
                row.spent.format_with_symbol(symbol),
                used,
                flag,
                name = NAME_WIDTH
            ));

            if detailed {
                for item in &row.items {
                    output.push_str(&format!(
                        "{:indent$}{:<name$} {} {:>12}\n",
                        "",
                        truncate(&item.description, NAME_WIDTH - ITEM_INDENT),
                        format_bar(item.amount.as_f64(), max, bar_width),
                        item.amount.format_with_symbol(symbol),
                        indent = ITEM_INDENT,
                        name = NAME_WIDTH - ITEM_INDENT
                    ));
                }
            }
        }

        output.push_str(&separator(line_width));
        output.push('\n');
        output.push_str(&format!(
            "Total spent: {} of {} across {} expenses\n",
            self.total_spent.format_with_symbol(symbol),
            self.total_budget.format_with_symbol(symbol),
            self.total_expenses
        ));

        let over: Vec<&str> = self
            .categories
            .iter()
            .filter(|c| c.over_budget)
            .map(|c| c.category_name.as_str())
            .collect();
        if !over.is_empty() {
            output.push_str(&format!("Over budget: {}\n", over.join(", ")));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_category("Food", Money::from_cents(10000)).unwrap();
        ledger.add_category("Fun", Money::from_cents(5000)).unwrap();
        ledger.add_category("Gifts", Money::zero()).unwrap();
        ledger
            .add_expense("Food", Money::from_cents(11000), "groceries")
            .unwrap();
        ledger
            .add_expense("Fun", Money::from_cents(2500), "cinema")
            .unwrap();
        ledger
    }

    #[test]
    fn test_generate() {
        let report = SpendingReport::generate(&sample_ledger());

        assert_eq!(report.categories.len(), 3);
        assert_eq!(report.total_spent, Money::from_cents(13500));
        assert_eq!(report.total_budget, Money::from_cents(15000));
        assert_eq!(report.total_expenses, 2);
        assert_eq!(report.max_spent(), Money::from_cents(11000));

        let food = &report.categories[0];
        assert!(food.over_budget);
        assert!((food.budget_used.unwrap() - 110.0).abs() < 1e-9);

        let fun = &report.categories[1];
        assert!((fun.budget_used.unwrap() - 50.0).abs() < 1e-9);
        assert!(report.categories[2].budget_used.is_none());
    }

    #[test]
    fn test_format_terminal() {
        let report = SpendingReport::generate(&sample_ledger());
        let output = report.format_terminal(10, "$", false);

        assert!(output.contains("Expenses by Category"));
        assert!(!output.contains("groceries"));
        assert!(output.contains(&format!("Food{}██████████", " ".repeat(17))));
        assert!(output.contains("110%"));
        assert!(output.contains("Total spent: $135.00 of $150.00 across 2 expenses"));
        assert!(output.contains("Over budget: Food"));
    }

    #[test]
    fn test_empty_ledger() {
        let report = SpendingReport::generate(&Ledger::new());
        assert!(report.max_spent().is_zero());
        assert!(report.format_terminal(10, "$", true).contains("No categories found."));
    }

    #[test]
    fn test_format_terminal_detailed() {
        let mut ledger = sample_ledger();
        ledger
            .add_expense("Food", Money::from_cents(5500), "takeaway")
            .unwrap();
        let report = SpendingReport::generate(&ledger);
        assert_eq!(report.categories[0].items.len(), 2);

        let output = report.format_terminal(10, "$", true);
        let food = output.find("Food").unwrap();
        let groceries = output.find("  groceries").unwrap();
        let takeaway = output.find("  takeaway").unwrap();
        let fun = output.find("Fun").unwrap();
        assert!(food < groceries && groceries < takeaway && takeaway < fun);

        // Food's total is the maximum, so its items get 110/165 and 55/165 of the bar
        assert!(output.contains(&format!("  groceries{}███████░░░", " ".repeat(10))));
        assert!(output.contains("$55.00"));
        assert!(output.contains("  cinema"));
    }
}
