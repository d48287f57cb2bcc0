//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! tide-config.toml file. It covers the forecast source (URL, timeout,
//! reference clock), chart window settings and outlook table options.
//!
//! The reference clock deserves a note: the widget can run against either a
//! fixed simulated instant (the out-of-the-box default, matching the
//! documented page behavior) or the real wall clock. Tests always supply an
//! explicit instant, so derived state never depends on when a test runs.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Application configuration loaded from tide-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Forecast feed configuration
    pub source: SourceConfig,
    /// Chart window and axis configuration
    pub chart: ChartConfig,
    /// Multi-day outlook configuration
    pub outlook: OutlookConfig,
}

/// Forecast feed configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct SourceConfig {
    /// URL of the tide forecast JSON document
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Fixed reference instant standing in for "now".
    /// `None` means use the wall clock at startup.
    pub reference_time: Option<DateTime<Utc>>,
}

/// Chart window and axis configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ChartConfig {
    /// First dataset index included in the chart window
    pub window_start: usize,
    /// One past the last dataset index included in the chart window
    pub window_end: usize,
    /// Fixed y-axis upper bound in meters.
    /// `None` derives the bound from the windowed data (max height + margin).
    pub y_max: Option<f32>,
}

/// Multi-day outlook configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutlookConfig {
    /// Maximum number of day rows in the outlook table
    pub days: usize,
    /// Sunrise/sunset column text. The forecast feed carries no solar data,
    /// so this stays a fixed placeholder.
    pub sun_times: String,
}

impl Config {
    /// The simulated "now" the page was written against: 14:00 UTC on the
    /// forecast's single real day.
    pub fn simulated_reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 11, 14, 0, 0).unwrap()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: SourceConfig {
                url: "http://localhost:8000/tides.json".to_string(),
                timeout_secs: 10,
                reference_time: Some(Config::simulated_reference()),
            },
            chart: ChartConfig {
                window_start: 10, // roughly midday...
                window_end: 23,   // ...to midnight at hourly cadence
                y_max: Some(3.0),
            },
            outlook: OutlookConfig {
                days: 3,
                sun_times: "08:05 / 16:30".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from tide-config.toml file
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("tide-config.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!(url = %config.source.url, "loaded configuration");
                    config
                }
                Err(e) => {
                    warn!("invalid config file format: {e}");
                    warn!("using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                info!("no config file found, using default configuration");
                Self::default()
            }
        }
    }

    /// Save current configuration to tide-config.toml
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write("tide-config.toml", contents)?;
        Ok(())
    }
}
