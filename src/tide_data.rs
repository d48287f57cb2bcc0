//! # Forecast Fetching and Parsing
//!
//! This module handles the single network operation of a page view: fetching
//! the tide forecast JSON and parsing it into a [`TideDataset`].
//!
//! ## Data Source
//!
//! The feed is a static JSON resource shaped as:
//!
//! ```json
//! { "data": [ {"time": "2026-01-11T14:00:00Z", "height": 1.2, "type": "rising"}, ... ] }
//! ```
//!
//! No authentication, no pagination, no content negotiation. Records arrive
//! in forward chronological order.
//!
//! ## Error Handling
//!
//! Failure modes are kept distinct so logs can tell them apart, even though
//! the page collapses them into one user-visible message:
//! - **Fetch**: network or transport failure
//! - **Status**: non-success HTTP status (e.g. 500)
//! - **Parse**: malformed or wrongly-shaped JSON
//! - **EmptyDataset**: well-formed document with no records
//!
//! All errors propagate through [`TideError`]; there is no retry, backoff or
//! cached fallback. A failed fetch is terminal for the widget.

use crate::{TideDataset, TideDocument};
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::SourceConfig;

/// Errors that can occur while loading or evaluating the forecast.
///
/// The variants mirror the widget's failure taxonomy: transport, HTTP
/// status, document shape, and the evaluator's explicit "no data" states.
#[derive(Error, Debug)]
pub enum TideError {
    /// Network or transport failure (DNS, connect, timeout, body read)
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    /// Response body is not a well-formed forecast document
    #[error("malformed forecast document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Document parsed but contains no records
    #[error("forecast document contains no records")]
    EmptyDataset,

    /// No record at or before the reference instant
    #[error("no tide record at or before {reference}")]
    NoCurrentRecord { reference: DateTime<Utc> },
}

/// Fetch and parse the forecast feed.
///
/// Performs one HTTP GET with the configured timeout, verifies the status,
/// and parses the body into a dataset. The fetch/parse split (body text
/// first, `serde_json` second) is what keeps transport and shape failures
/// distinguishable in logs.
///
/// # Example
/// ```no_run
/// use tide_watch_lib::config::Config;
/// use tide_watch_lib::tide_data;
///
/// # async fn run() {
/// let config = Config::default();
/// match tide_data::fetch(&config.source).await {
///     Ok(dataset) => println!("{} records", dataset.records.len()),
///     Err(err) => eprintln!("forecast unavailable: {err}"),
/// }
/// # }
/// ```
pub async fn fetch(source: &SourceConfig) -> Result<TideDataset, TideError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(source.timeout_secs))
        .build()?;

    let response = client.get(&source.url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(TideError::Status(status));
    }

    let body = response.text().await?;
    let dataset = parse(&body)?;

    debug!(records = dataset.records.len(), "parsed forecast document");
    Ok(dataset)
}

/// Parse a forecast document body into a dataset.
///
/// Split out of [`fetch`] so the document shape can be tested without a
/// network. An empty `data` array is rejected here: downstream evaluation
/// must never see a dataset it cannot locate a current record in.
pub fn parse(body: &str) -> Result<TideDataset, TideError> {
    let document: TideDocument = serde_json::from_str(body)?;
    let dataset = TideDataset::from(document);
    if dataset.is_empty() {
        return Err(TideError::EmptyDataset);
    }
    Ok(dataset)
}
