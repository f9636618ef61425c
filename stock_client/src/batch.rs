//! Paced download of daily history for a list of symbols.
//!
//! Each symbol is written to `<out_dir>/<SYMBOL>_historical.json`. Symbols whose file
//! already exists are skipped, so an interrupted run can simply be restarted. Requests are
//! spaced by a fixed interval to stay under the provider's call quota behind the service.
//! A failing symbol is logged and the run moves on to the next one.
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use log::{error, info, warn};
use stock_common::{HistoricalStockData, Result, StockError};

/// Granularity at which a pause checks for shutdown.
const SLEEP_STEP: Duration = Duration::from_millis(200);
/// Progress is logged every this many symbols.
const PROGRESS_EVERY: usize = 10;

/// Settings of a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Output directory, created if missing.
    pub out_dir: PathBuf,
    /// Pause between two requests.
    pub interval: Duration,
}

/// Outcome counters of a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files written.
    pub saved: usize,
    /// Symbols skipped because their file already existed.
    pub skipped: usize,
    /// Symbols that failed to fetch or save.
    pub failed: usize,
    /// Whether the run stopped early on shutdown.
    pub interrupted: bool,
}

/// File receiving the history of `symbol`.
pub fn output_path(out_dir: &Path, symbol: &str) -> PathBuf {
    out_dir.join(format!("{symbol}_historical.json"))
}

/// Write `data` as pretty JSON to the output file of `symbol`.
pub fn save_historical(out_dir: &Path, symbol: &str, data: &HistoricalStockData) -> Result<PathBuf> {
    let path = output_path(out_dir, symbol);
    let json = serde_json::to_vec_pretty(data)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Fetch and save the history of every symbol with `fetch`.
///
/// Stops between symbols once `shutdown` is set.
pub fn fetch_all<F>(
    symbols: &[String],
    options: &BatchOptions,
    shutdown: &AtomicBool,
    mut fetch: F,
) -> Result<BatchSummary>
where
    F: FnMut(&str) -> Result<HistoricalStockData>,
{
    fs::create_dir_all(&options.out_dir)?;
    info!(
        "Starting historical data collection for {} symbols (1 request every {}s)",
        symbols.len(),
        options.interval.as_secs_f64()
    );

    let mut summary = BatchSummary::default();
    let mut requested_any = false;

    for (i, symbol) in symbols.iter().enumerate() {
        let symbol = symbol.as_str();
        if shutdown.load(Ordering::Relaxed) {
            summary.interrupted = true;
            break;
        }

        if output_path(&options.out_dir, symbol).exists() {
            info!("Skipping {} - already processed", symbol);
            summary.skipped += 1;
        } else {
            if requested_any && !pause(options.interval, shutdown) {
                summary.interrupted = true;
                break;
            }
            requested_any = true;

            match fetch(symbol).and_then(|data| save_historical(&options.out_dir, symbol, &data)) {
                Ok(path) => {
                    info!("Saved historical data for {} to {}", symbol, path.display());
                    summary.saved += 1;
                }
                Err(StockError::NotFound(msg)) => {
                    warn!("No data for {}: {}", symbol, msg);
                    summary.failed += 1;
                }
                Err(e) => {
                    error!("Error processing {}: {}", symbol, e);
                    summary.failed += 1;
                }
            }
        }

        if (i + 1) % PROGRESS_EVERY == 0 {
            info!("Processed {}/{} symbols", i + 1, symbols.len());
        }
    }

    if summary.interrupted {
        warn!("Historical data collection interrupted");
    } else {
        info!("Historical data collection completed!");
    }
    Ok(summary)
}

/// Sleep for `interval`, waking early on shutdown. Returns `false` if interrupted.
fn pause(interval: Duration, shutdown: &AtomicBool) -> bool {
    let mut remaining = interval;
    while !remaining.is_zero() {
        if shutdown.load(Ordering::Relaxed) {
            return false;
        }
        let step = remaining.min(SLEEP_STEP);
        thread::sleep(step);
        remaining -= step;
    }
    !shutdown.load(Ordering::Relaxed)
}
