//! # Multi-Day Outlook Table
//!
//! Groups the dataset by calendar day and extracts each day's high and low
//! water times and heights for the outlook table. The sunrise/sunset column
//! is a configured placeholder: the forecast feed carries no solar data.

use chrono::{Datelike, NaiveDate, Weekday};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::config::OutlookConfig;
use crate::{TideDataset, TideKind, TideRecord};

/// One row of the outlook table, one calendar day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlookRow {
    /// Day label, e.g. "Sunday 11 Jan"
    pub day: String,
    /// High-water times and heights, e.g. "10:00 (2.5m), 23:00 (2.4m)"
    pub highs: String,
    /// Low-water times and heights
    pub lows: String,
    /// Sunrise/sunset placeholder text
    pub sun_times: String,
    pub weekend: bool,
}

/// Aggregate the dataset into per-day outlook rows, capped at the configured
/// day count. Days appear in chronological order; a day with no high (or
/// low) records gets a dash in that column.
pub fn rows(dataset: &TideDataset, config: &OutlookConfig) -> Vec<OutlookRow> {
    let mut days: Vec<(NaiveDate, Vec<&TideRecord>)> = Vec::new();
    for record in &dataset.records {
        let date = record.time.date_naive();
        match days.last_mut() {
            Some((last, group)) if *last == date => group.push(record),
            _ => days.push((date, vec![record])),
        }
    }

    days.into_iter()
        .take(config.days)
        .map(|(date, group)| OutlookRow {
            day: date.format("%A %-d %b").to_string(),
            highs: extrema(&group, TideKind::High),
            lows: extrema(&group, TideKind::Low),
            sun_times: config.sun_times.clone(),
            weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        })
        .collect()
}

fn extrema(group: &[&TideRecord], kind: TideKind) -> String {
    let entries: Vec<String> = group
        .iter()
        .filter(|r| r.kind == kind)
        .map(|r| format!("{} ({:.1}m)", r.time.format("%H:%M"), r.height))
        .collect();

    if entries.is_empty() {
        "—".to_string()
    } else {
        entries.join(", ")
    }
}

/// Render outlook rows as a terminal table. Weekend day labels are bold,
/// standing in for the page's weekend row highlight.
pub fn render_table(rows: &[OutlookRow]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Day"),
        header_cell("High Tide"),
        header_cell("Low Tide"),
        header_cell("Sunrise / Sunset"),
    ]);

    for row in rows {
        let mut day = Cell::new(&row.day);
        if row.weekend {
            day = day.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            day,
            Cell::new(&row.highs),
            Cell::new(&row.lows),
            Cell::new(&row.sun_times),
        ]);
    }

    table.to_string()
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
