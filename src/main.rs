use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use tally::cli::{
    handle_add, handle_clear_history, handle_delete, handle_history, handle_list, handle_reset,
    handle_total,
};
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::services::RolloverService;
use tally::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based monthly expense tracker",
    long_about = "tally-cli records dated expenses, keeps a running total for the \
                  active calendar month, and automatically archives completed months \
                  into a per-month history summary."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount spent (e.g., "4.50" or "15")
        amount: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List the active month's expenses
    #[command(alias = "ls")]
    List,

    /// Delete an expense by ID
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (e.g., "exp-1a2b3c4d" or the full UUID)
        id: String,
    },

    /// Show the running total for the active month
    Total,

    /// Show archived month history
    History,

    /// Archive the current month now and start a fresh one
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Discard all archived history (irreversible)
    ClearHistory {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    // Reconcile the active month against today's date before any command
    // runs; a stale month from a previous run is archived here.
    let rollover = RolloverService::new(&storage);
    if let Some(notice) = rollover.reconcile(Local::now().date_naive())? {
        println!("{}", notice);
        println!();
    }

    match cli.command {
        Some(Commands::Add {
            description,
            amount,
            date,
        }) => {
            handle_add(&storage, &settings, &description, &amount, date.as_deref())?;
        }
        Some(Commands::List) => {
            handle_list(&storage, &settings)?;
        }
        Some(Commands::Delete { id }) => {
            handle_delete(&storage, &id)?;
        }
        Some(Commands::Total) => {
            handle_total(&storage, &settings)?;
        }
        Some(Commands::History) => {
            handle_history(&storage, &settings)?;
        }
        Some(Commands::Reset { yes }) => {
            handle_reset(&storage, yes)?;
        }
        Some(Commands::ClearHistory { yes }) => {
            handle_clear_history(&storage, yes)?;
        }
        Some(Commands::Config) => {
            println!("tally-cli Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            handle_list(&storage, &settings)?;
            println!();
            println!("Run 'tally --help' for usage information.");
        }
    }

    Ok(())
}
