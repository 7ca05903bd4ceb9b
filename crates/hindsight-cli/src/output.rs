//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use hindsight::Entry;

/// Print one history entry as a row.
pub fn entry_row(entry: &Entry) {
    let time = entry.datetime.format("%Y-%m-%d %H:%M:%S").to_string();
    if entry.title.is_empty() {
        println!("{}  {}", time.dimmed(), entry.url.blue());
    } else {
        println!("{}  {}  {}", time.dimmed(), entry.title, entry.url.blue());
    }
}

/// Print a page separator.
pub fn page_header(number: usize) {
    eprintln!("{}", format!("── page {} ──", number).dimmed());
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}
