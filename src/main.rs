//! # Tide Watch Entry Point
//!
//! Thin binary around the library: parse CLI arguments, set up logging,
//! load configuration, then run one page view against the terminal sink.
//!
//! A widget-level failure (network down, malformed feed) is not a process
//! failure: the page still renders its error message and the process exits
//! cleanly, matching the page's behavior of loading with a degraded widget.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tide_watch_lib::config::Config;
use tide_watch_lib::page;
use tide_watch_lib::sink::TerminalSink;

#[derive(Parser, Debug)]
#[command(name = "tide-watch")]
#[command(about = "Tide status widget for Freshwater Bay", long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = "tide-config.toml")]
    config: PathBuf,

    /// Override the forecast feed URL
    #[arg(long)]
    url: Option<String>,

    /// Reference instant override (RFC 3339), e.g. 2026-01-11T14:00:00Z
    #[arg(long, value_parser = parse_instant, conflicts_with = "now")]
    at: Option<DateTime<Utc>>,

    /// Use the wall clock instead of the configured reference instant
    #[arg(long)]
    now: bool,
}

fn parse_instant(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(text).map(|instant| instant.with_timezone(&Utc))
}

fn main() -> Result<()> {
    // Log to stderr so the rendered page stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::load_from_path(&args.config);
    if let Some(url) = args.url {
        config.source.url = url;
    }
    if let Some(at) = args.at {
        config.source.reference_time = Some(at);
    }
    if args.now {
        config.source.reference_time = None;
    }

    let rt = tokio::runtime::Runtime::new()?;
    let mut sink = TerminalSink::new();
    rt.block_on(page::run(&config, &mut sink));

    Ok(())
}
