use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use money_tracker::audit::AuditLogger;
use money_tracker::cli::{
    handle_audit, handle_balance, handle_categories, handle_export_command, handle_list,
    handle_record, ExportCommands, TransactionArgs,
};
use money_tracker::config::{Settings, TrackerPaths};
use money_tracker::display::DisplayOptions;
use money_tracker::logging::init_tracing;
use money_tracker::models::TransactionKind;
use money_tracker::storage::JsonFileStore;
use money_tracker::Ledger;

#[derive(Parser)]
#[command(
    name = "money-tracker",
    version,
    about = "Personal income and expense ledger",
    long_about = "money-tracker records income and expenses against a running balance, \
                  refuses expenses the balance cannot cover, and keeps a persistent \
                  history with per-category totals and CSV/statement exports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record income
    Income(TransactionArgs),

    /// Record an expense (refused if it exceeds the balance)
    Expense(TransactionArgs),

    /// Show the transaction history and category totals
    #[command(alias = "ls")]
    List {
        /// Only show the most recent N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the current balance
    Balance,

    /// Show per-category totals
    Categories,

    /// Export the ledger
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Create the data directories, settings file, and an empty ledger
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let Some(command) = cli.command else {
        println!("money-tracker - personal income and expense ledger");
        println!();
        println!("Run 'money-tracker --help' for usage information.");
        return Ok(());
    };

    let opts = DisplayOptions::from_settings(&settings)?;

    match command {
        Commands::Income(args) => {
            let mut ledger = open_ledger(&paths, &settings)?;
            handle_record(&mut ledger, &opts, TransactionKind::Income, args)?;
        }
        Commands::Expense(args) => {
            let mut ledger = open_ledger(&paths, &settings)?;
            handle_record(&mut ledger, &opts, TransactionKind::Expense, args)?;
        }
        Commands::List { limit } => handle_list(&open_ledger(&paths, &settings)?, &opts, limit)?,
        Commands::Balance => handle_balance(&open_ledger(&paths, &settings)?, &opts),
        Commands::Categories => handle_categories(&open_ledger(&paths, &settings)?, &opts)?,
        Commands::Export(cmd) => {
            handle_export_command(&open_ledger(&paths, &settings)?, &paths, &settings, cmd)?
        }
        Commands::Audit { limit } => {
            handle_audit(&AuditLogger::new(paths.audit_log()), &opts, limit)?
        }
        Commands::Init => run_init(&paths, &settings)?,
        Commands::Config => print_config(&paths, &settings),
    }

    Ok(())
}

/// Load the ledger store, attaching the audit log when enabled
fn open_ledger(paths: &TrackerPaths, settings: &Settings) -> Result<Ledger<JsonFileStore>> {
    let ledger = Ledger::load(JsonFileStore::new(paths.ledger_file()))?;
    if settings.audit_enabled {
        return Ok(ledger.with_audit_logger(AuditLogger::new(paths.audit_log())));
    }
    Ok(ledger)
}

fn run_init(paths: &TrackerPaths, settings: &Settings) -> Result<()> {
    if paths.is_initialized() {
        println!(
            "money-tracker is already initialized at: {}",
            paths.base_dir().display()
        );
        println!("Existing settings and ledger were left unchanged.");
        return Ok(());
    }

    println!("Initializing money-tracker at: {}", paths.base_dir().display());
    paths.ensure_directories()?;
    settings.save(paths)?;

    let ledger = open_ledger(paths, settings)?;
    ledger.save()?;

    println!("Initialization complete!");
    println!("Ledger: {} transactions", ledger.len());
    println!();
    println!("Run 'money-tracker income 1000 Salary Work' to record your first entry.");
    Ok(())
}

fn print_config(paths: &TrackerPaths, settings: &Settings) {
    println!("money-tracker Configuration");
    println!("===========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Ledger file:      {}", paths.ledger_file().display());
    println!("Export directory: {}", paths.export_dir().display());
    println!("Audit log:        {}", paths.audit_log().display());
    if paths.is_initialized() {
        println!("Initialized:      yes");
    } else {
        println!("Initialized:      no (run 'money-tracker init')");
    }
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Timestamp format:  {}", settings.timestamp_format);
    println!("  CSV file name:     {}", settings.csv_filename);
    println!("  Statement file:    {}", settings.statement_filename);
    println!("  Audit enabled:     {}", settings.audit_enabled);
    println!("  Coloured statement: {}", settings.colored_statement);
}
