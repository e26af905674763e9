use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_add, handle_delete, handle_list, handle_summary, handle_trend, AddArgs, ListArgs,
    SummaryArgs,
};
use expense_ledger::clock::SystemClock;
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::logging::init_tracing;
use expense_ledger::models::UuidGenerator;
use expense_ledger::services::ExpenseLedger;
use expense_ledger::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracking from the terminal",
    long_about = "Record day-to-day expenses and see where the money goes: \
                  filtered expense lists, spending summaries by category and \
                  a monthly trend."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete an expense by ID
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },

    /// Show the spending summary
    Summary(SummaryArgs),

    /// Show spending per month for the last six active months
    Trend,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Expense Ledger - personal expense tracking");
        println!();
        println!("Run 'expenses --help' for usage information.");
        return Ok(());
    };

    if let Commands::Config = command {
        println!("Expense Ledger Configuration");
        println!("============================");
        println!("Base directory: {}", paths.base_dir().display());
        println!("Settings file:  {}", paths.settings_file().display());
        println!("Expenses file:  {}", paths.expenses_file().display());
        println!();
        println!("Settings:");
        println!("  Currency symbol:    {}", settings.currency_symbol);
        println!("  Default time range: {}", settings.default_time_range.label());
        println!("  Date format:        {}", settings.date_format);
        println!("  Seed on first run:  {}", settings.seed_on_first_run);

        if !paths.settings_file().exists() {
            settings.save(&paths)?;
            println!();
            println!("Wrote default settings to {}", paths.settings_file().display());
        }
        return Ok(());
    }

    let mut ledger = ExpenseLedger::open(
        Box::new(JsonFileStore::new(paths.expenses_file())),
        Box::new(SystemClock),
        Box::new(UuidGenerator),
        settings.seed_on_first_run,
    );

    match command {
        Commands::Add(args) => handle_add(&mut ledger, &settings, args)?,
        Commands::List(args) => handle_list(&ledger, &settings, args)?,
        Commands::Delete { id } => handle_delete(&mut ledger, &id)?,
        Commands::Summary(args) => handle_summary(&ledger, &settings, args)?,
        Commands::Trend => handle_trend(&ledger, &settings)?,
        Commands::Config => {}
    }

    Ok(())
}
