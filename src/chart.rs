//! # Chart Series Construction and Rendering
//!
//! Builds the line-chart series for the "next hours" panel: a configured
//! contiguous window of the dataset (roughly midday to midnight at the
//! feed's hourly cadence), hour-of-day labels and a zero-based y-axis.
//!
//! Series construction is pure; the charting collaborator is opaque to the
//! rest of the widget. [`render_ascii`] is the terminal stand-in for it and
//! nothing downstream consumes its output.

use crate::config::ChartConfig;
use crate::TideDataset;

/// Fallback y-axis bound when the window is empty and no bound is configured
const DEFAULT_Y_MAX_M: f32 = 3.0;
/// Headroom applied to the data maximum when the bound is data-derived
const Y_MARGIN: f32 = 1.15;

/// Style hints handed to the charting collaborator along with the data.
#[derive(Clone, Copy, Debug)]
pub struct SeriesStyle {
    pub label: &'static str,
    pub line_color: &'static str,
    pub fill: bool,
    pub tension: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        SeriesStyle {
            label: "Height (m)",
            line_color: "#004e64",
            fill: true,
            tension: 0.4,
        }
    }
}

/// A fully prepared line-chart series: ordered labels, ordered values, axis
/// bound and style hints.
#[derive(Clone, Debug)]
pub struct ChartSeries {
    /// Hour-of-day label per point, e.g. "14"
    pub labels: Vec<String>,
    /// Height per point, meters
    pub values: Vec<f32>,
    /// Y-axis upper bound; the axis always begins at zero
    pub y_max: f32,
    pub style: SeriesStyle,
}

/// Build the chart series from the configured dataset window.
///
/// The window is clamped to the dataset bounds, so a short dataset yields a
/// short (possibly empty) series rather than a panic. With no configured
/// `y_max` the bound is the windowed maximum plus headroom, which keeps an
/// unusually high spring tide from clipping against a fixed axis.
pub fn series(dataset: &TideDataset, config: &ChartConfig) -> ChartSeries {
    let len = dataset.records.len();
    let start = config.window_start.min(len);
    let end = config.window_end.clamp(start, len);
    let window = &dataset.records[start..end];

    let labels = window
        .iter()
        .map(|r| r.time.format("%H").to_string())
        .collect();
    let values: Vec<f32> = window.iter().map(|r| r.height).collect();

    let y_max = config.y_max.unwrap_or_else(|| {
        let peak = values.iter().copied().fold(0.0f32, f32::max);
        if peak > 0.0 {
            peak * Y_MARGIN
        } else {
            DEFAULT_Y_MAX_M
        }
    });

    ChartSeries {
        labels,
        values,
        y_max,
        style: SeriesStyle::default(),
    }
}

/// Render a series as an ASCII line chart.
///
/// One column per point, heights mapped onto a fixed row grid between zero
/// and `y_max`, hour labels underneath. Values above the bound clamp to the
/// top row instead of escaping the grid.
pub fn render_ascii(series: &ChartSeries) -> String {
    const ROWS: usize = 12;
    const Y_AXIS_WIDTH: usize = 6;
    const COL_WIDTH: usize = 4;

    if series.values.is_empty() {
        return "(no chart data)".to_string();
    }

    let y_max = series.y_max.max(f32::EPSILON);
    let value_to_row =
        |h: f32| ((1.0 - h.clamp(0.0, y_max) / y_max) * (ROWS as f32 - 1.0)).round() as usize;

    let width = Y_AXIS_WIDTH + series.values.len() * COL_WIDTH;
    let mut grid = vec![vec![' '; width]; ROWS];

    // Y-axis labels every half meter, every meter on tall axes
    let tide_step = if y_max > 4.0 { 1.0 } else { 0.5 };
    let mut mark = 0.0f32;
    while mark <= y_max {
        let row = value_to_row(mark);
        let label = format!("{:>4.1}", mark);
        for (i, ch) in label.chars().enumerate() {
            grid[row][i] = ch;
        }
        grid[row][Y_AXIS_WIDTH - 1] = '│';
        mark += tide_step;
    }

    for (column, &value) in series.values.iter().enumerate() {
        let row = value_to_row(value);
        grid[row][Y_AXIS_WIDTH + column * COL_WIDTH + 1] = '•';
    }

    let mut out = String::new();
    out.push_str(series.style.label);
    out.push('\n');
    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }

    // Hour labels, one per column
    out.push_str(&" ".repeat(Y_AXIS_WIDTH));
    for label in &series.labels {
        out.push_str(&format!(" {:<width$}", label, width = COL_WIDTH - 1));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TideKind, TideRecord};
    use chrono::{TimeZone, Utc};

    fn hourly_dataset(hours: u32) -> TideDataset {
        let records = (0..hours)
            .map(|h| TideRecord {
                time: Utc.with_ymd_and_hms(2026, 1, 11, h, 0, 0).unwrap(),
                height: 1.0 + (h as f32 * 0.1),
                kind: TideKind::Rising,
            })
            .collect();
        TideDataset { records }
    }

    #[test]
    fn default_window_spans_midday_to_midnight() {
        let dataset = hourly_dataset(24);
        let series = series(&dataset, &crate::config::Config::default().chart);

        assert_eq!(series.values.len(), 13);
        assert_eq!(series.labels.first().unwrap(), "10");
        assert_eq!(series.labels.last().unwrap(), "22");
        assert!((series.y_max - 3.0).abs() < 1e-6);
    }

    #[test]
    fn window_clamps_to_short_dataset() {
        let dataset = hourly_dataset(12);
        let series = series(&dataset, &crate::config::Config::default().chart);

        // Only indexes 10 and 11 exist inside the configured window
        assert_eq!(series.values.len(), 2);
        assert_eq!(series.labels, vec!["10", "11"]);
    }

    #[test]
    fn empty_window_renders_placeholder() {
        let dataset = hourly_dataset(5);
        let config = ChartConfig {
            window_start: 10,
            window_end: 23,
            y_max: Some(3.0),
        };

        let series = series(&dataset, &config);
        assert!(series.values.is_empty());
        assert_eq!(render_ascii(&series), "(no chart data)");
    }

    #[test]
    fn derived_bound_adds_headroom_over_peak() {
        let dataset = hourly_dataset(24);
        let config = ChartConfig {
            window_start: 0,
            window_end: 24,
            y_max: None,
        };

        let series = series(&dataset, &config);
        let peak = 1.0 + 23.0 * 0.1;
        assert!((series.y_max - peak * 1.15).abs() < 1e-4);
    }

    #[test]
    fn ascii_chart_contains_markers_and_labels() {
        let dataset = hourly_dataset(24);
        let rendered = render_ascii(&series(&dataset, &crate::config::Config::default().chart));

        assert!(rendered.contains("Height (m)"));
        assert!(rendered.contains('•'));
        assert!(rendered.contains(" 10 "));
        assert!(rendered.contains("22"));
    }

    #[test]
    fn values_above_bound_clamp_to_top_row() {
        let mut dataset = hourly_dataset(2);
        dataset.records[1].height = 99.0;
        let config = ChartConfig {
            window_start: 0,
            window_end: 2,
            y_max: Some(3.0),
        };

        // Must not panic or index outside the grid
        let rendered = render_ascii(&series(&dataset, &config));
        assert!(rendered.contains('•'));
    }
}
