//! Symbol list files.
//!
//! One symbol per line. Surrounding whitespace is trimmed, blank lines and lines starting
//! with `#` are skipped, and repeated symbols are kept once, in first-seen order.
use std::collections::HashSet;
use std::io::BufRead;

use stock_common::Result;

/// Read symbols from a buffered reader.
pub fn parse_symbols<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut symbols = Vec::new();

    for line_result in reader.lines() {
        let line = line_result?;
        let trimmed_line = line.trim();
        if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
            continue;
        }
        if seen.insert(trimmed_line.to_string()) {
            symbols.push(trimmed_line.to_string());
        }
    }
    Ok(symbols)
}
