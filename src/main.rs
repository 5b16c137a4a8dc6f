use std::path::PathBuf;

use anyhow::Result;
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use expense_tracker::cli::{handle_expense_command, ExpenseCommands};
use expense_tracker::config::{TrackerPaths, DATA_FILE_ENV};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track expenses in a local JSON file.",
    long_about = "Records expenses (amount, category, optional note) to a local JSON \
                  file, lists and totals them, and exports them to CSV."
)]
struct Cli {
    /// Expense data file (defaults to expenses.json next to the executable)
    #[arg(
        long,
        global = true,
        env = DATA_FILE_ENV,
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: ExpenseCommands,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = TrackerPaths::resolve(cli.file)?;
    let storage = Storage::new(paths);

    handle_expense_command(&storage, cli.command)?;
    Ok(())
}
