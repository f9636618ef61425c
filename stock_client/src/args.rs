//! Command-line arguments for the stock client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stock_common::net::default_base_url;

use crate::sp500::SP500_URL;

/// Symbol list shared by `fetch-symbols` and `fetch-all`.
pub const DEFAULT_SYMBOLS_FILE: &str = "stock_data/stock_symbols.txt";

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the stock price API, e.g. `http://localhost:8080/api/stocks`.
    #[clap(long, global = true, default_value_t = default_base_url())]
    pub server_url: String,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Client operations.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current price of a symbol.
    Price {
        /// Ticker symbol, e.g. `AAPL`.
        symbol: String,
    },
    /// Print the daily history of a symbol as JSON.
    Historical {
        /// Ticker symbol, e.g. `AAPL`.
        symbol: String,
    },
    /// Download the S&P 500 symbol list into a file.
    FetchSymbols {
        /// File receiving one symbol per line.
        #[clap(long, default_value = DEFAULT_SYMBOLS_FILE)]
        out: PathBuf,

        /// Page listing the index constituents.
        #[clap(long, default_value = SP500_URL)]
        source_url: String,
    },
    /// Download the daily history of every symbol listed in a file.
    FetchAll {
        /// Path to a text file with one symbol per line.
        #[clap(long, default_value = DEFAULT_SYMBOLS_FILE)]
        path: String,

        /// Directory receiving one `<SYMBOL>_historical.json` file per symbol.
        #[clap(long, default_value = "stock_data/historical")]
        out_dir: PathBuf,

        /// Pause between two requests, in seconds.
        #[clap(long, default_value_t = 12)]
        interval_secs: u64,
    },
}
