//! S&P 500 constituent list.
//!
//! The list is scraped from the constituents page on Wikipedia: the first column of the
//! first `wikitable` holds the ticker. Class-share tickers are written with a dash
//! (`BRK.B` becomes `BRK-B`), the form quote providers expect.
use std::fs;
use std::path::Path;

use log::info;
use reqwest::blocking::Client;
use stock_common::{Result, StockError};

/// Default source page.
pub const SP500_URL: &str = "https://en.wikipedia.org/wiki/List_of_S%26P_500_companies";

const USER_AGENT: &str = concat!("stock_client/", env!("CARGO_PKG_VERSION"));

/// Download the constituents page at `url` and extract its symbols.
pub fn fetch_symbols(url: &str) -> Result<Vec<String>> {
    info!("Fetching S&P 500 stock symbols from {}", url);
    let http = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| StockError::Config(format!("Failed to build HTTP client: {e}")))?;
    let html = http
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|e| StockError::Upstream(e.to_string()))?;
    extract_symbols(&html)
}

/// Extract the first-column cells of the first `wikitable` in `html`.
pub fn extract_symbols(html: &str) -> Result<Vec<String>> {
    let table_start = html
        .find("class=\"wikitable")
        .ok_or_else(|| StockError::Upstream("Symbol table not found in page".to_string()))?;
    let table = &html[table_start..];
    let table = &table[..table.find("</table>").unwrap_or(table.len())];

    let mut symbols = Vec::new();
    // Header rows carry only <th> cells and are skipped.
    for row in table.split("<tr").skip(1) {
        let Some(cell) = first_cell(row) else {
            continue;
        };
        let symbol = strip_tags(cell).trim().replace('.', "-");
        if !symbol.is_empty() {
            symbols.push(symbol);
        }
    }

    if symbols.is_empty() {
        return Err(StockError::Upstream("Symbol table has no rows".to_string()));
    }
    Ok(symbols)
}

/// Write `symbols` to `path`, one per line.
pub fn save_symbols(path: &Path, symbols: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut contents = symbols.join("\n");
    contents.push('\n');
    fs::write(path, contents)?;
    info!("Saved {} stock symbols to {}", symbols.len(), path.display());
    Ok(())
}

/// Inner HTML of the first `<td>` of a row.
fn first_cell(row: &str) -> Option<&str> {
    let open = row.find("<td")?;
    let rest = &row[open..];
    let body = &rest[rest.find('>')? + 1..];
    let end = body.find("</td>").unwrap_or(body.len());
    Some(&body[..end])
}

fn strip_tags(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for c in fragment.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}
