//! Stock Client — command-line consumer of the stock price service.
//!
//! Looks up a single symbol's current price or daily history, downloads the S&P 500 symbol
//! list, or downloads the history of every symbol listed in a file into one JSON file per
//! symbol.
//!
//! Usage example (CLI):
//! ```bash
//! stock_client price aapl
//! stock_client historical msft > msft.json
//! stock_client fetch-symbols --out ./stock_symbols.txt
//! stock_client fetch-all --path ./stock_symbols.txt --out-dir ./stock_data/historical
//! ```
//!
//! The symbol file holds one symbol per line. See `symbols` for details.
#![warn(missing_docs)]
mod api;
mod args;
mod batch;
mod sp500;
mod symbols;

use crate::api::StockApiClient;
use crate::args::{Args, Command};
use crate::batch::{BatchOptions, fetch_all};
use crate::sp500::{fetch_symbols, save_symbols};
use crate::symbols::parse_symbols;
use clap::Parser;
use log::{error, info};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;
use stock_common::Result;
use stock_common::StockError;

fn main() -> Result<(), StockError> {
    init_logger();
    let args = Args::parse();
    let client = StockApiClient::new(&args.server_url)?;

    match args.command {
        Command::FetchSymbols { out, source_url } => {
            let symbols = fetch_symbols(&source_url)?;
            save_symbols(&out, &symbols)?;
        }
        Command::Price { symbol } => {
            let quote = client.price(&symbol)?;
            info!(
                "QUOTE: {} Price={:.2} Time={}",
                quote.symbol, quote.price, quote.timestamp
            );
        }
        Command::Historical { symbol } => {
            let data = client.historical(&symbol)?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Command::FetchAll {
            path,
            out_dir,
            interval_secs,
        } => {
            let file_path = normalize_path(&path);
            let file = File::open(&file_path).map_err(|e| {
                error!("Cannot open symbol file {}: {}", file_path.display(), e);
                StockError::Io(e)
            })?;
            let symbols = parse_symbols(BufReader::new(file))?;
            if symbols.is_empty() {
                error!(
                    "No symbols found in {}. Run `fetch-symbols` first",
                    file_path.display()
                );
                return Ok(());
            }
            info!("Read {} symbols from {}", symbols.len(), file_path.display());

            let shutdown = Arc::new(AtomicBool::new(false));
            {
                let shutdown = shutdown.clone();
                ctrlc::set_handler(move || {
                    info!("Ctrl+C received. Stopping after the current symbol...");
                    shutdown.store(true, Ordering::SeqCst);
                })
                .map_err(|e| StockError::Config(format!("Error setting Ctrl+C handler: {e}")))?;
            }

            let options = BatchOptions {
                out_dir,
                interval: Duration::from_secs(interval_secs),
            };
            let summary = fetch_all(&symbols, &options, &shutdown, |symbol| {
                client.historical(symbol)
            })?;
            info!(
                "Saved: {}, skipped: {}, failed: {}",
                summary.saved, summary.skipped, summary.failed
            );
        }
    }

    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
