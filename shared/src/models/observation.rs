//! Atmospheric observation models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Point weather values for one day (or one averaged month)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RawObservation {
    pub temperature_celsius: f64,
    pub relative_humidity_percent: f64,
    /// Precipitation in mm/day
    pub precipitation_mm: f64,
    pub wind_speed_mps: f64,
}

/// Observation for a specific calendar day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub observation: RawObservation,
}

/// Multi-year average for a calendar month.
/// Humidity and wind are optional because not every climatology query returns them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClimatologyRecord {
    /// 1 = January
    pub month: u32,
    pub temperature_celsius: f64,
    pub precipitation_mm: f64,
    pub relative_humidity_percent: Option<f64>,
    pub wind_speed_mps: Option<f64>,
}

/// Monthly climatology for a year range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Climatology {
    pub start_year: i32,
    pub end_year: i32,
    pub records: Vec<ClimatologyRecord>,
}

impl Climatology {
    pub fn month(&self, month: u32) -> Option<&ClimatologyRecord> {
        self.records.iter().find(|r| r.month == month)
    }

    /// "2015-2024" style label
    pub fn period_label(&self) -> String {
        format!("{}-{}", self.start_year, self.end_year)
    }
}

/// Three-letter month keys used by climatology sources
pub const MONTH_KEYS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Month number (1-12) for a three-letter key
pub fn month_from_key(key: &str) -> Option<u32> {
    MONTH_KEYS
        .iter()
        .position(|k| k.eq_ignore_ascii_case(key))
        .map(|i| i as u32 + 1)
}
