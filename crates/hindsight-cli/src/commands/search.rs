//! Search command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use tracing::info;

use hindsight::{FilterConfig, VisitFinder, VisitQuery};
use hindsight_file::FileProvider;

use crate::cli::parse_time;
use crate::output;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Path to the JSON history export
    #[arg(long)]
    pub file: PathBuf,

    /// Substring to match against titles and URLs
    #[arg(long, default_value = "")]
    pub text: String,

    /// Window start (epoch ms or RFC 3339)
    #[arg(long)]
    pub from: Option<String>,

    /// Window end (epoch ms or RFC 3339), defaults to now
    #[arg(long)]
    pub to: Option<String>,

    /// Maximum number of visits to return
    #[arg(long)]
    pub limit: Option<usize>,

    /// Keep reloads and protocol-only changes
    #[arg(long)]
    pub no_filter: bool,

    /// Output entries as JSON, one per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SearchArgs) -> Result<()> {
    let provider = FileProvider::open(&args.file)
        .await
        .context("Failed to open history export")?;
    let finder = VisitFinder::new(Arc::new(provider));

    let mut query = VisitQuery::new().with_text(&args.text);
    if let Some(from) = &args.from {
        query.start_ms = parse_time(from).context("Invalid --from")?;
    }
    if let Some(to) = &args.to {
        query.end_ms = parse_time(to).context("Invalid --to")?;
    }
    if let Some(limit) = args.limit {
        query = query.limit(limit);
    }
    let filter = if args.no_filter {
        FilterConfig::none()
    } else {
        FilterConfig::default()
    };

    let entries = finder
        .search(&query, &filter)
        .await
        .context("Search failed")?;

    let Some(entries) = entries else {
        eprintln!("{}", "No visits found.".dimmed());
        return Ok(());
    };
    info!(entries = entries.len(), "search finished");
    for entry in &entries {
        if args.json {
            output::json(entry)?;
        } else {
            output::entry_row(entry);
        }
    }
    Ok(())
}
