//! Category display formatting
//!
//! Formats categories, their line items and the recent expenses view for
//! terminal output.

use crate::error::SpendbookError;
use crate::models::{Category, ExpenseOutcome, LedgerSummary, RecentExpense};

use super::report::truncate;

const MAX_DESCRIPTION_WIDTH: usize = 40;

/// Format the budget summary table
pub fn format_category_list(summary: &LedgerSummary, symbol: &str) -> String {
    if summary.categories.is_empty() {
        return "No categories found.\n\nRun 'spendbook category add <name> <budget>' to create one.\n"
            .to_string();
    }

    let name_width = summary
        .categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}  {:>5}\n",
        "Category",
        "Budget",
        "Spent",
        "Remaining",
        "Items",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->12}  {:->12}  {:->5}\n",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for row in &summary.categories {
        let flag = if row.over_budget { "  OVER" } else { "" };
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {:>12}  {:>5}{}\n",
            row.name,
            row.budget.format_with_symbol(symbol),
            row.spent.format_with_symbol(symbol),
            row.remaining.format_with_symbol(symbol),
            row.expense_count,
            flag,
            width = name_width
        ));
    }

    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}\n",
        "Total",
        summary.total_budget.format_with_symbol(symbol),
        summary.total_spent.format_with_symbol(symbol),
        summary.total_remaining().format_with_symbol(symbol),
        width = name_width
    ));

    output
}

/// Format category details with every line item
pub fn format_category_details(category: &Category, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!(
        "  Budget:           {}\n",
        category.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Current Expenses: {}\n",
        category.spent().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Remaining Budget: {}\n",
        category.remaining().format_with_symbol(symbol)
    ));

    if category.is_over_budget() {
        output.push_str("  Status:           over budget\n");
    }

    if category.items().is_empty() {
        output.push_str("\n  No expenses recorded.\n");
    } else {
        output.push_str("\n  Expenses:\n");
        for (i, item) in category.items().iter().enumerate() {
            output.push_str(&format!(
                "  {:>3}. {:<desc$}  {:>12}\n",
                i + 1,
                truncate(&item.description, MAX_DESCRIPTION_WIDTH),
                item.amount.format_with_symbol(symbol),
                desc = MAX_DESCRIPTION_WIDTH
            ));
        }
    }

    output
}

/// Format the recent expenses view
pub fn format_recent_expenses(expenses: &[RecentExpense<'_>], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let cat_width = expenses
        .iter()
        .map(|e| e.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<cat$}  {:<desc$}  {:>12}\n",
        "Category",
        "Description",
        "Amount",
        cat = cat_width,
        desc = MAX_DESCRIPTION_WIDTH
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<cat$}  {:<desc$}  {:>12}\n",
            expense.category,
            truncate(&expense.item.description, MAX_DESCRIPTION_WIDTH),
            expense.item.amount.format_with_symbol(symbol),
            cat = cat_width,
            desc = MAX_DESCRIPTION_WIDTH
        ));
    }

    output
}

/// Format the budget-exceeded advisory for a recorded expense
pub fn format_budget_warning(outcome: &ExpenseOutcome, symbol: &str) -> String {
    format!(
        "Warning: Budget exceeded for '{}'\n  Budget:         {}\n  Total Expenses: {}\n",
        outcome.category,
        outcome.budget.format_with_symbol(symbol),
        outcome.total.format_with_symbol(symbol)
    )
}

/// Notice for a change that was saved but is missing from the audit log
pub fn format_audit_warning(err: &SpendbookError) -> String {
    format!(
        "Warning: the change was saved but could not be added to the audit log ({})",
        err
    )
}
