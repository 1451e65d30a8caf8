//! Category CLI commands
//!
//! Implements CLI commands for creating and inspecting categories.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::category::{
    format_audit_warning, format_category_details, format_category_list,
};
use crate::error::SpendbookResult;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a new category with a budget
    Add {
        /// Category name
        name: String,
        /// Budget amount (e.g., "500" or "500.00")
        budget: String,
    },

    /// List all categories with budget, spent and remaining
    List,

    /// Show a category and all of its expenses
    Show {
        /// Category name
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> SpendbookResult<()> {
    let service = LedgerService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CategoryCommands::Add { name, budget } => {
            let saved = service.add_category(&name, &budget)?;
            let category = saved.value;
            println!(
                "Category '{}' added with a budget of {}.",
                category.name,
                category.budget.format_with_symbol(symbol)
            );
            if let Some(err) = saved.audit_error {
                eprintln!("{}", format_audit_warning(&err));
            }
        }

        CategoryCommands::List => {
            let summary = service.summary()?;
            print!("{}", format_category_list(&summary, symbol));
        }

        CategoryCommands::Show { category } => {
            let category = service.find_category(&category)?;
            print!("{}", format_category_details(&category, symbol));
        }
    }

    Ok(())
}
