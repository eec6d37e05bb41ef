//! quotecache CLI - cached historical price fetcher for Yahoo Finance.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "quotecache")]
#[command(about = "Cached historical price fetcher for Yahoo Finance", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show price history for a ticker, fetching only when the cache is stale
    Prices {
        /// Ticker symbol (e.g. AAPL, BRK-B, ^GSPC)
        ticker: String,

        /// Cache directory
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,

        /// Staleness threshold in hours
        #[arg(long, default_value = "24")]
        max_age_hours: u64,

        /// Force a remote fetch even if the cache is fresh
        #[arg(long)]
        refresh: bool,

        /// Number of most recent rows to print
        #[arg(short, long, default_value = "10")]
        tail: usize,
    },

    /// Show cache freshness for one or all cached tickers
    Status {
        /// Ticker symbol (all cached tickers if omitted)
        ticker: Option<String>,

        /// Cache directory
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,

        /// Staleness threshold in hours
        #[arg(long, default_value = "24")]
        max_age_hours: u64,
    },

    /// List cached tickers
    List {
        /// Cache directory
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Prices {
            ticker,
            data_dir,
            max_age_hours,
            refresh,
            tail,
        } => {
            commands::prices::prices(&ticker, data_dir, max_age_hours, refresh, tail, cli.quiet)
                .await
        }
        Commands::Status {
            ticker,
            data_dir,
            max_age_hours,
        } => commands::status::status(ticker.as_deref(), data_dir, max_age_hours),
        Commands::List { data_dir } => commands::list::list(data_dir),
    }
}
