//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::category::{
    format_audit_warning, format_budget_warning, format_recent_expenses,
};
use crate::error::SpendbookResult;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense against a category
    Add {
        /// Category name
        category: String,
        /// Amount spent (e.g., "12.50")
        amount: String,
        /// What the money was spent on
        #[arg(short, long)]
        description: String,
    },

    /// Show every expense across all categories in ledger order
    Recent {
        /// Maximum number of expenses to show (defaults to the configured limit, or all)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SpendbookResult<()> {
    let service = LedgerService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            description,
        } => {
            let saved = service.add_expense(&category, &amount, &description)?;
            let outcome = saved.value;

            println!(
                "Expense of {} added to '{}'.",
                outcome.amount.format_with_symbol(symbol),
                outcome.category
            );
            println!(
                "  Current Expenses: {}",
                outcome.total.format_with_symbol(symbol)
            );
            println!(
                "  Remaining Budget: {}",
                outcome.remaining().format_with_symbol(symbol)
            );

            if outcome.exceeded {
                eprint!("{}", format_budget_warning(&outcome, symbol));
            }
            if let Some(err) = saved.audit_error {
                eprintln!("{}", format_audit_warning(&err));
            }
        }

        ExpenseCommands::Recent { limit } => {
            let ledger = service.ledger()?;
            let recent = ledger.recent_expenses(limit.or(settings.recent_limit));
            print!("{}", format_recent_expenses(&recent, symbol));
        }
    }

    Ok(())
}
