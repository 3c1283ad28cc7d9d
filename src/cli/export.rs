//! CLI commands for data export

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::{Settings, TrackerPaths};
use crate::display::DisplayOptions;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_full_json, export_full_yaml, export_statement, export_transactions_csv};
use crate::ledger::Ledger;
use crate::storage::LedgerStore;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export transactions to CSV
    Csv {
        /// Output file path (defaults to the configured CSV file in the exports directory)
        output: Option<PathBuf>,
    },

    /// Export a printable statement table
    Statement {
        /// Output file path (defaults to the configured statement file in the exports directory)
        output: Option<PathBuf>,

        /// Disable income/expense row colours
        #[arg(long)]
        no_color: bool,
    },

    /// Export the full ledger as JSON
    Json {
        /// Output file path
        output: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export the full ledger as YAML
    Yaml {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command<S: LedgerStore>(
    ledger: &Ledger<S>,
    paths: &TrackerPaths,
    settings: &Settings,
    cmd: ExportCommands,
) -> TrackerResult<()> {
    let opts = DisplayOptions::from_settings(settings)?;

    match cmd {
        ExportCommands::Csv { output } => {
            let output = output.unwrap_or_else(|| paths.export_dir().join(&settings.csv_filename));
            let count = export_transactions_csv(ledger.snapshot(), &opts, create_output(&output)?)?;
            println!("Exported {} transactions to: {}", count, output.display());
        }
        ExportCommands::Statement { output, no_color } => {
            let output =
                output.unwrap_or_else(|| paths.export_dir().join(&settings.statement_filename));
            let colored = settings.colored_statement && !no_color;
            let count = export_statement(
                ledger.snapshot(),
                ledger.current_balance(),
                &opts,
                colored,
                create_output(&output)?,
            )?;
            println!("Exported statement of {} transactions to: {}", count, output.display());
        }
        ExportCommands::Json { output, pretty } => {
            export_full_json(ledger, create_output(&output)?, pretty)?;
            println!("Full ledger exported to: {}", output.display());
        }
        ExportCommands::Yaml { output } => {
            export_full_yaml(ledger, create_output(&output)?)?;
            println!("Full ledger exported to: {}", output.display());
        }
    }

    Ok(())
}

/// Open an export file for writing, creating parent directories
fn create_output(path: &Path) -> TrackerResult<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
