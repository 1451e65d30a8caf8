use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendbook::cli::{
    handle_category_command, handle_expense_command, handle_export_command,
    handle_history_command, handle_report_command, CategoryCommands, ExpenseCommands,
    ExportFormat,
};
use spendbook::config::{paths::SpendbookPaths, settings::Settings};
use spendbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendbook",
    version,
    about = "Category budgets and expense tracking",
    long_about = "Spendbook keeps a budget per category and a running list of \
                  expenses against it. Recording an expense updates the category \
                  total and warns when the budget is exceeded."
)]
struct Cli {
    /// Directory holding the ledger, settings and audit log
    #[arg(long, global = true, env = "SPENDBOOK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new ledger
    Init,

    /// Show current configuration and paths
    Config,

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show spending per category against its budget
    Report {
        /// Break each category down into its expenses
        #[arg(short, long)]
        detailed: bool,
    },

    /// Export the ledger
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => SpendbookPaths::with_base_dir(dir),
        None => SpendbookPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Spendbook at: {}", paths.base_dir().display());
            spendbook::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'spendbook category add <name> <budget>' to create a category.");
        }
        Some(Commands::Config) => {
            println!("Spendbook Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            match settings.recent_limit {
                Some(limit) => println!("  Recent limit:    {}", limit),
                None => println!("  Recent limit:    all"),
            }
            println!("  Chart width:     {}", settings.chart_width);
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report { detailed }) => {
            handle_report_command(&storage, &settings, detailed)?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, format, output)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        None => {
            println!("Spendbook - category budgets and expense tracking");
            println!();
            println!("Run 'spendbook --help' for usage information.");
        }
    }

    Ok(())
}
