//! # Page Bootstrap
//!
//! Orchestrates one page view: fetch the forecast, derive the live status,
//! then render status panel, chart, outlook table and promo block into the
//! sink. This module is the widget's only error boundary: any failure along
//! the way is logged with its distinct cause and collapses to a single
//! user-visible message in the safety region, with no other region written.

use chrono::Utc;
use tracing::error;

use crate::config::Config;
use crate::sink::{OutputSink, Region};
use crate::tide_data::{self, TideError};
use crate::{chart, outlook, promo, status, TideDataset};

/// The one user-visible failure message, regardless of cause.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading live tide data. Please try again later.";

/// Run one full page view: fetch, derive, render.
pub async fn run(config: &Config, sink: &mut dyn OutputSink) {
    let fetched = tide_data::fetch(&config.source).await;
    render_or_report(fetched, config, sink);
}

/// Render a fetched dataset, or report the failure.
///
/// Split from [`run`] so the error boundary is testable without a network.
pub fn render_or_report(
    fetched: Result<TideDataset, TideError>,
    config: &Config,
    sink: &mut dyn OutputSink,
) {
    let outcome = fetched.and_then(|dataset| render_page(&dataset, config, sink));

    if let Err(err) = outcome {
        // Distinct causes in the logs, one message on the page
        match &err {
            TideError::Fetch(_) | TideError::Status(_) => {
                error!(cause = %err, "forecast fetch failed")
            }
            TideError::Parse(_) => error!(cause = %err, "forecast document malformed"),
            TideError::EmptyDataset | TideError::NoCurrentRecord { .. } => {
                error!(cause = %err, "no usable tide data")
            }
        }
        sink.write(Region::SafetyMessage, LOAD_ERROR_MESSAGE);
    }
}

/// Render every region from an immutable dataset.
///
/// Status evaluation happens before any write, so an evaluator failure
/// renders nothing at all; the three content renderers are independent of
/// each other and cannot fail.
pub fn render_page(
    dataset: &TideDataset,
    config: &Config,
    sink: &mut dyn OutputSink,
) -> Result<(), TideError> {
    let reference = config.source.reference_time.unwrap_or_else(Utc::now);
    let current = status::evaluate(dataset, reference)?;

    sink.write(Region::StatusBadge, current.safety.badge());
    sink.write(Region::Direction, current.direction.label());
    sink.write(Region::Height, &format!("{}m", current.height));
    if let Some(event) = &current.next_event {
        sink.write(Region::NextEvent, &event.label());
    }
    sink.write(Region::SafetyMessage, current.safety.advisory());

    let series = chart::series(dataset, &config.chart);
    sink.write(Region::Chart, &chart::render_ascii(&series));

    let days = outlook::rows(dataset, &config.outlook);
    sink.write(Region::OutlookTable, &outlook::render_table(&days));

    sink.write(Region::AdContainer, &promo::render(promo::select(current.height)));

    Ok(())
}
