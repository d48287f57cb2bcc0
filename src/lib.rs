//! # Tide Watch Core Library
//!
//! Core data model and derivation logic for the Freshwater Bay tide widget.
//! The library is split along a strict pure-computation / rendering seam:
//!
//! - [`tide_data`] fetches and parses the forecast document
//! - [`status`], [`chart`], [`outlook`] and [`promo`] derive plain values
//!   from an immutable [`TideDataset`]
//! - [`sink`] defines the named output regions the derived values are
//!   written into, and [`page`] orchestrates one full page render
//!
//! ## Data Flow
//! 1. **Fetch**: HTTP GET of the forecast JSON → [`TideDocument`]
//! 2. **Derive**: status, chart series, outlook rows, promo variant
//! 3. **Render**: write each derived value into its [`sink::Region`]
//!
//! The dataset is loaded once per run and never mutated; every derivation is
//! a pure function of the dataset and an explicit reference instant, so the
//! same input always produces the same derived state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Module declarations
pub mod chart;
pub mod config;
pub mod outlook;
pub mod page;
pub mod promo;
pub mod sink;
pub mod status;
pub mod tide_data;

/// Role of a sample within the tide cycle.
///
/// `High` and `Low` mark turning points (the "events" the widget announces);
/// `Rising` and `Falling` tag the samples in between. Wire format is the
/// lowercase tag used by the forecast feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TideKind {
    High,
    Low,
    Rising,
    Falling,
}

impl TideKind {
    /// True for the turning-point kinds (`high`, `low`).
    pub fn is_event(self) -> bool {
        matches!(self, TideKind::High | TideKind::Low)
    }

    /// Uppercase display form, e.g. `HIGH` in "HIGH at 19:30".
    pub fn label(self) -> &'static str {
        match self {
            TideKind::High => "HIGH",
            TideKind::Low => "LOW",
            TideKind::Rising => "RISING",
            TideKind::Falling => "FALLING",
        }
    }
}

/// A single tide observation from the forecast feed.
///
/// # Example
/// ```
/// use tide_watch_lib::{TideKind, TideRecord};
///
/// let record: TideRecord =
///     serde_json::from_str(r#"{"time":"2026-01-11T14:00:00Z","height":1.2,"type":"rising"}"#)
///         .unwrap();
/// assert_eq!(record.kind, TideKind::Rising);
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TideRecord {
    /// Absolute instant of the observation
    pub time: DateTime<Utc>,
    /// Tide height in meters above chart datum (non-negative)
    pub height: f32,
    /// Role of this sample in the tide cycle
    #[serde(rename = "type")]
    pub kind: TideKind,
}

/// Wire shape of the forecast feed: `{ "data": [ ... ] }`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TideDocument {
    pub data: Vec<TideRecord>,
}

/// Ordered sequence of tide records for one page view.
///
/// Records are ordered by non-decreasing `time`; the next-event scan in
/// [`status`] relies on forward chronological order. Created once from a
/// fetched [`TideDocument`] and immutable afterwards.
#[derive(Clone, Debug)]
pub struct TideDataset {
    pub records: Vec<TideRecord>,
}

impl TideDataset {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<TideDocument> for TideDataset {
    fn from(doc: TideDocument) -> Self {
        TideDataset { records: doc.data }
    }
}
