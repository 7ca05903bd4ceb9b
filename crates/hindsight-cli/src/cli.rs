//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Browse a JSON history export from the terminal.
#[derive(Parser, Debug)]
#[command(name = "hindsight")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// One-shot search for visits in a time window
    Search(crate::commands::search::SearchArgs),

    /// Page backward through history, newest first
    List(crate::commands::list::ListArgs),
}

/// Parse a time given either as epoch milliseconds or RFC 3339.
pub fn parse_time(s: &str) -> anyhow::Result<i64> {
    if let Ok(ms) = s.parse::<i64>() {
        return Ok(ms);
    }
    let parsed = chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|err| anyhow::anyhow!("'{}' is neither epoch ms nor RFC 3339: {}", s, err))?;
    Ok(parsed.timestamp_millis())
}
