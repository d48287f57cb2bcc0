//! # Tide Status Evaluation
//!
//! Pure derivation of the widget's live state from the dataset and an
//! explicit reference instant: direction, safety classification and the next
//! high/low event. Nothing in this module touches an output sink; callers
//! render the returned [`DerivedStatus`] however they like.
//!
//! ## Safety Ladder
//!
//! Classification is an ordered, first-match ladder over height and
//! direction, total for `height >= 0`:
//!
//! | Condition                          | Class   |
//! |------------------------------------|---------|
//! | `h < 0.8`                          | Safe    |
//! | `0.8 <= h < 1.5` and falling       | Warning |
//! | `h >= 0.8` and rising              | Danger  |
//! | otherwise (high water, falling)    | Info    |
//!
//! The 0.8 m line is where the caves and rock pools start to cut off; 1.5 m
//! is where a falling tide stops being "becoming accessible" and is simply
//! high water.

use crate::tide_data::TideError;
use crate::{TideDataset, TideKind, TideRecord};
use chrono::{DateTime, Utc};
use tracing::warn;

/// Below this height the caves and rock pools are accessible (meters)
pub const LOW_WATER_M: f32 = 0.8;
/// Above this height a falling tide no longer counts as opening up (meters)
pub const HIGH_WATER_M: f32 = 1.5;

/// Which way the tide is moving at the current record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Rising,
    Falling,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Rising => "RISING",
            Direction::Falling => "FALLING",
        }
    }
}

/// User-facing safety classification driving the advisory message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SafetyClass {
    Safe,
    Warning,
    Danger,
    Info,
}

impl SafetyClass {
    /// Badge text: the class name, uppercased.
    pub fn badge(self) -> &'static str {
        match self {
            SafetyClass::Safe => "SAFE",
            SafetyClass::Warning => "WARNING",
            SafetyClass::Danger => "DANGER",
            SafetyClass::Info => "INFO",
        }
    }

    /// Advisory message shown alongside the badge.
    pub fn advisory(self) -> &'static str {
        match self {
            SafetyClass::Safe => "LOW TIDE: Perfect for exploring the Caves & Rock Pools.",
            SafetyClass::Warning => "TIDE FALLING: Caves becoming accessible soon. Use caution.",
            SafetyClass::Danger => {
                "DANGER: Tide is rising. Do not attempt Cave walk. Beach may be cut off."
            }
            SafetyClass::Info => "HIGH TIDE: Perfect for swimming and kayaking.",
        }
    }
}

/// The soonest upcoming high or low tide after the reference instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NextEvent {
    /// Always `High` or `Low`
    pub kind: TideKind,
    pub time: DateTime<Utc>,
}

impl NextEvent {
    /// Display form, e.g. "HIGH at 19:30".
    pub fn label(&self) -> String {
        format!("{} at {}", self.kind.label(), self.time.format("%H:%M"))
    }
}

/// Everything the live-status panel needs, derived in one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedStatus {
    pub direction: Direction,
    pub safety: SafetyClass,
    /// Height of the current record, meters
    pub height: f32,
    /// Absent when no high/low record follows the reference instant
    pub next_event: Option<NextEvent>,
}

/// Derive the current tide status for a reference instant.
///
/// Fails with [`TideError::NoCurrentRecord`] when the dataset is empty or
/// the reference instant precedes every record; the caller's error boundary
/// turns that into the page-level failure message.
pub fn evaluate(
    dataset: &TideDataset,
    reference: DateTime<Utc>,
) -> Result<DerivedStatus, TideError> {
    let current = current_record(dataset, reference)?;
    let direction = direction_of(current.kind);

    Ok(DerivedStatus {
        direction,
        safety: classify(current.height, direction),
        height: current.height,
        next_event: next_event(dataset, reference),
    })
}

/// Direction implied by a record's kind.
///
/// A `low` sample counts as rising: the turning point is behind it, so the
/// water is already coming back in.
pub fn direction_of(kind: TideKind) -> Direction {
    match kind {
        TideKind::Rising | TideKind::Low => Direction::Rising,
        TideKind::Falling | TideKind::High => Direction::Falling,
    }
}

/// First-match safety ladder; see the module docs for the table.
pub fn classify(height: f32, direction: Direction) -> SafetyClass {
    if height < LOW_WATER_M {
        SafetyClass::Safe
    } else if height < HIGH_WATER_M && direction == Direction::Falling {
        SafetyClass::Warning
    } else if direction == Direction::Rising {
        SafetyClass::Danger
    } else {
        SafetyClass::Info
    }
}

/// First high/low record strictly after the reference instant, if any.
pub fn next_event(dataset: &TideDataset, reference: DateTime<Utc>) -> Option<NextEvent> {
    dataset
        .records
        .iter()
        .find(|r| r.time > reference && r.kind.is_event())
        .map(|r| NextEvent {
            kind: r.kind,
            time: r.time,
        })
}

/// Select the record representing "now".
///
/// Exact timestamp match wins. Otherwise the latest record at-or-before the
/// reference is used and the miss is logged; a reference earlier than the
/// whole dataset is an explicit failure, never a positional guess.
fn current_record(
    dataset: &TideDataset,
    reference: DateTime<Utc>,
) -> Result<&TideRecord, TideError> {
    if let Some(exact) = dataset.records.iter().find(|r| r.time == reference) {
        return Ok(exact);
    }

    // Records are chronological, so the first match from the back is the
    // nearest preceding sample.
    match dataset.records.iter().rev().find(|r| r.time <= reference) {
        Some(record) => {
            warn!(
                %reference,
                selected = %record.time,
                "no exact record for reference instant, using nearest preceding sample"
            );
            Ok(record)
        }
        None => Err(TideError::NoCurrentRecord { reference }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 11, hour, min, 0).unwrap()
    }

    fn record(hour: u32, height: f32, kind: TideKind) -> TideRecord {
        TideRecord {
            time: at(hour, 0),
            height,
            kind,
        }
    }

    fn day_dataset() -> TideDataset {
        TideDataset {
            records: vec![
                record(4, 0.6, TideKind::Low),
                record(7, 1.4, TideKind::Rising),
                record(10, 2.5, TideKind::High),
                record(14, 1.2, TideKind::Falling),
                record(17, 0.5, TideKind::Low),
                record(20, 1.6, TideKind::Rising),
                record(23, 2.4, TideKind::High),
            ],
        }
    }

    #[test]
    fn low_heights_are_safe_in_both_directions() {
        for direction in [Direction::Rising, Direction::Falling] {
            for h in [0.0, 0.3, 0.79] {
                assert_eq!(classify(h, direction), SafetyClass::Safe);
            }
        }
    }

    #[test]
    fn mid_band_falling_is_warning() {
        for h in [0.8, 1.0, 1.49] {
            assert_eq!(classify(h, Direction::Falling), SafetyClass::Warning);
        }
    }

    #[test]
    fn rising_above_low_water_is_danger() {
        for h in [0.8, 1.2, 1.5, 2.9] {
            assert_eq!(classify(h, Direction::Rising), SafetyClass::Danger);
        }
    }

    #[test]
    fn high_water_falling_is_info() {
        for h in [1.5, 2.0, 3.0] {
            assert_eq!(classify(h, Direction::Falling), SafetyClass::Info);
        }
    }

    #[test]
    fn classification_is_total() {
        // Every (height, direction) pair maps to exactly one class; sweep a
        // fine grid across the realistic range without panicking.
        for step in 0..=350 {
            let h = step as f32 * 0.01;
            for direction in [Direction::Rising, Direction::Falling] {
                let _ = classify(h, direction);
            }
        }
    }

    #[test]
    fn low_sample_counts_as_rising() {
        assert_eq!(direction_of(TideKind::Low), Direction::Rising);
        assert_eq!(direction_of(TideKind::Rising), Direction::Rising);
        assert_eq!(direction_of(TideKind::High), Direction::Falling);
        assert_eq!(direction_of(TideKind::Falling), Direction::Falling);
    }

    #[test]
    fn next_event_is_strictly_after_reference() {
        let dataset = day_dataset();

        // Reference sits exactly on the 17:00 low: that event must not be
        // reported as upcoming.
        let event = next_event(&dataset, at(17, 0)).unwrap();
        assert_eq!(event.kind, TideKind::High);
        assert_eq!(event.time, at(23, 0));

        // Mid-afternoon: the 17:00 low is next, skipping the rising sample.
        let event = next_event(&dataset, at(14, 30)).unwrap();
        assert_eq!(event.kind, TideKind::Low);
        assert_eq!(event.label(), "LOW at 17:00");
    }

    #[test]
    fn next_event_absent_after_last_turning_point() {
        let dataset = day_dataset();
        assert_eq!(next_event(&dataset, at(23, 0)), None);
    }

    #[test]
    fn evaluate_with_exact_match() {
        let dataset = day_dataset();
        let status = evaluate(&dataset, at(14, 0)).unwrap();

        assert_eq!(status.direction, Direction::Falling);
        assert_eq!(status.safety, SafetyClass::Warning);
        assert!((status.height - 1.2).abs() < 1e-6);
        assert_eq!(status.next_event.unwrap().label(), "LOW at 17:00");
    }

    #[test]
    fn evaluate_falls_back_to_nearest_preceding_record() {
        let dataset = day_dataset();

        // 15:30 has no sample; the 14:00 falling record is the nearest
        // preceding one.
        let status = evaluate(&dataset, at(15, 30)).unwrap();
        assert_eq!(status.direction, Direction::Falling);
        assert!((status.height - 1.2).abs() < 1e-6);
    }

    #[test]
    fn evaluate_fails_before_first_record() {
        let dataset = day_dataset();
        let err = evaluate(&dataset, at(0, 30)).unwrap_err();
        assert!(matches!(err, TideError::NoCurrentRecord { .. }));
    }

    #[test]
    fn evaluate_fails_on_empty_dataset() {
        let dataset = TideDataset { records: vec![] };
        let err = evaluate(&dataset, at(12, 0)).unwrap_err();
        assert!(matches!(err, TideError::NoCurrentRecord { .. }));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let dataset = day_dataset();
        let first = evaluate(&dataset, at(14, 0)).unwrap();
        let second = evaluate(&dataset, at(14, 0)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn two_record_scenario() {
        // Dataset [low @ T0 0.5m, high @ T1 2.6m], reference T0:
        // rising, safe, next event HIGH at T1.
        let dataset = TideDataset {
            records: vec![record(6, 0.5, TideKind::Low), record(12, 2.6, TideKind::High)],
        };

        let status = evaluate(&dataset, at(6, 0)).unwrap();
        assert_eq!(status.direction, Direction::Rising);
        assert_eq!(status.safety, SafetyClass::Safe);
        assert_eq!(status.next_event.unwrap().label(), "HIGH at 12:00");
    }
}
