//! List command implementation.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use hindsight::{FilterConfig, StreamConfig, Throttle, VisitStreamer};
use hindsight_file::FileProvider;

use crate::cli::parse_time;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
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

    /// Entries per page
    #[arg(long, default_value_t = 20)]
    pub page_size: usize,

    /// Keep reloads and protocol-only changes
    #[arg(long)]
    pub no_filter: bool,

    /// Wait for Enter between pages instead of printing everything
    #[arg(long)]
    pub interactive: bool,

    /// Minimum milliseconds between page fetches in interactive mode;
    /// keypresses inside the window are dropped
    #[arg(long, default_value_t = 300)]
    pub throttle_ms: u64,

    /// Output entries as JSON, one per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let provider = FileProvider::open(&args.file)
        .await
        .context("Failed to open history export")?;

    let mut config = StreamConfig::new(&args.text, args.page_size);
    if let Some(from) = &args.from {
        config.start_ms = parse_time(from).context("Invalid --from")?;
    }
    if let Some(to) = &args.to {
        config.end_ms = parse_time(to).context("Invalid --to")?;
    }
    if args.no_filter {
        config = config.with_filter(FilterConfig::none());
    }
    let mut stream = VisitStreamer::new(Arc::new(provider), config);

    if args.interactive {
        run_interactive(&mut stream, &args).await
    } else {
        run_all(&mut stream, &args).await
    }
}

/// Print every page in order.
async fn run_all(stream: &mut VisitStreamer<FileProvider>, args: &ListArgs) -> Result<()> {
    let mut page_number = 0usize;
    while let Some(page) = stream.next_page(None).await.context("Page fetch failed")? {
        page_number += 1;
        print_page(&page, page_number, args)?;
    }
    if page_number == 0 {
        eprintln!("{}", "No visits found.".dimmed());
    }
    info!(pages = page_number, "history listed");
    Ok(())
}

/// Fetch one page per Enter keypress, dropping presses that arrive faster
/// than the throttle interval.
async fn run_interactive(stream: &mut VisitStreamer<FileProvider>, args: &ListArgs) -> Result<()> {
    let mut throttle = Throttle::new(Duration::from_millis(args.throttle_ms));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut page_number = 0usize;

    eprintln!("{}", "Press Enter for the next page, Ctrl+D to stop.".dimmed());
    loop {
        // The first page needs no keypress; later ones do.
        if page_number > 0 {
            match lines.next_line().await.context("Failed to read stdin")? {
                Some(_) if throttle.try_acquire() => {}
                Some(_) => continue,
                None => return Ok(()),
            }
        } else {
            throttle.try_acquire();
        }

        match stream.next_page(None).await.context("Page fetch failed")? {
            Some(page) => {
                page_number += 1;
                print_page(&page, page_number, args)?;
            }
            None => {
                eprintln!("{}", "End of history.".dimmed());
                return Ok(());
            }
        }
    }
}

fn print_page(page: &[hindsight::Entry], number: usize, args: &ListArgs) -> Result<()> {
    if !args.json {
        output::page_header(number);
    }
    for entry in page {
        if args.json {
            output::json(entry)?;
        } else {
            output::entry_row(entry);
        }
    }
    Ok(())
}
