//! Date resolution: which data source answers a given target date
//!
//! Windows are measured from "today" as supplied by the caller:
//! - supported: [today - 3650 days, today + 366 days]
//! - reliable:  [today - 3650 days, today + 90 days]
//!
//! Past dates use the historical daily archive, today through the reliable
//! horizon uses multi-year climatology, anything later is out of range.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{ClimatologyRecord, RawObservation};
use crate::types::DateRange;

/// Ten years of daily archive, counted as 365-day years
pub const HISTORY_LOOKBACK_DAYS: i64 = 365 * 10;

/// Horizon up to which climatology is considered a reliable stand-in
pub const RELIABLE_HORIZON_DAYS: i64 = 90;

/// Outer horizon accepted for comparison points
pub const SUPPORTED_HORIZON_DAYS: i64 = 366;

/// Number of years averaged by the climatology query
pub const CLIMATOLOGY_LOOKBACK_YEARS: i32 = 10;

/// Climatology humidity default when the provider omits RH2M
pub const DEFAULT_HUMIDITY_PERCENT: f64 = 60.0;

/// Climatology wind default when the provider omits WS2M
pub const DEFAULT_WIND_SPEED_MPS: f64 = 3.0;

/// Floor applied to every derived precipitation value
pub const MIN_PRECIPITATION_MM: f64 = 0.1;

/// Strategy chosen for a target date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStrategy {
    /// Strictly before today: fetch that exact day
    HistoricalDaily,
    /// Today through the reliable horizon: monthly climatology
    Climatology,
    /// Past the reliable horizon: no fetch at all
    OutOfRange,
}

/// Dates for which comparison points may be produced
pub fn supported_window(today: NaiveDate) -> DateRange {
    DateRange::new(
        today - Duration::days(HISTORY_LOOKBACK_DAYS),
        today + Duration::days(SUPPORTED_HORIZON_DAYS),
    )
}

/// Dates for which an analysis is produced
pub fn reliable_window(today: NaiveDate) -> DateRange {
    DateRange::new(
        today - Duration::days(HISTORY_LOOKBACK_DAYS),
        today + Duration::days(RELIABLE_HORIZON_DAYS),
    )
}

/// Pick the data source for a target date
pub fn select_source(target: NaiveDate, today: NaiveDate) -> SourceStrategy {
    if target > reliable_window(today).end {
        SourceStrategy::OutOfRange
    } else if target < today {
        SourceStrategy::HistoricalDaily
    } else {
        SourceStrategy::Climatology
    }
}

/// Year range averaged by climatology: the ten full years before this one
pub fn climatology_years(today: NaiveDate) -> (i32, i32) {
    (
        today.year() - CLIMATOLOGY_LOOKBACK_YEARS,
        today.year() - 1,
    )
}

/// Linear intra-month precipitation factor, 1.0 on day 15
pub fn day_of_month_factor(day: u32, amplitude: f64) -> f64 {
    1.0 + (f64::from(day) - 15.0) / 30.0 * amplitude
}

/// Turn a monthly climatology record into a day estimate.
///
/// Precipitation is scaled by up to 30% across the month, humidity and wind
/// fall back to fixed defaults when the provider omitted them.
pub fn observation_from_climatology(record: &ClimatologyRecord, day: u32) -> RawObservation {
    let precipitation =
        (record.precipitation_mm * day_of_month_factor(day, 0.3)).max(MIN_PRECIPITATION_MM);

    RawObservation {
        temperature_celsius: record.temperature_celsius,
        relative_humidity_percent: record
            .relative_humidity_percent
            .unwrap_or(DEFAULT_HUMIDITY_PERCENT),
        precipitation_mm: precipitation,
        wind_speed_mps: record.wind_speed_mps.unwrap_or(DEFAULT_WIND_SPEED_MPS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn record(precip: f64) -> ClimatologyRecord {
        ClimatologyRecord {
            month: 6,
            temperature_celsius: 24.0,
            precipitation_mm: precip,
            relative_humidity_percent: None,
            wind_speed_mps: None,
        }
    }

    #[test]
    fn test_select_source_past_is_historical() {
        assert_eq!(
            select_source(today() - Duration::days(1), today()),
            SourceStrategy::HistoricalDaily
        );
        assert_eq!(
            select_source(today() - Duration::days(3000), today()),
            SourceStrategy::HistoricalDaily
        );
    }

    #[test]
    fn test_select_source_today_is_climatology() {
        assert_eq!(select_source(today(), today()), SourceStrategy::Climatology);
    }

    #[test]
    fn test_select_source_horizon_boundary() {
        assert_eq!(
            select_source(today() + Duration::days(90), today()),
            SourceStrategy::Climatology
        );
        assert_eq!(
            select_source(today() + Duration::days(91), today()),
            SourceStrategy::OutOfRange
        );
        assert_eq!(
            select_source(today() + Duration::days(400), today()),
            SourceStrategy::OutOfRange
        );
    }

    #[test]
    fn test_windows() {
        let supported = supported_window(today());
        assert_eq!(supported.start, today() - Duration::days(3650));
        assert_eq!(supported.end, today() + Duration::days(366));
        assert_eq!(reliable_window(today()).end, today() + Duration::days(90));
    }

    #[test]
    fn test_climatology_years() {
        assert_eq!(climatology_years(today()), (2015, 2024));
    }

    #[test]
    fn test_day_factor_centered_on_fifteenth() {
        assert_eq!(day_of_month_factor(15, 0.3), 1.0);
        assert!(day_of_month_factor(1, 0.3) < 1.0);
        assert!(day_of_month_factor(31, 0.3) > 1.0);
    }

    #[test]
    fn test_climatology_adjustment() {
        let mid = observation_from_climatology(&record(3.0), 15);
        assert_eq!(mid.precipitation_mm, 3.0);
        assert_eq!(mid.relative_humidity_percent, DEFAULT_HUMIDITY_PERCENT);
        assert_eq!(mid.wind_speed_mps, DEFAULT_WIND_SPEED_MPS);

        let late = observation_from_climatology(&record(3.0), 30);
        assert!((late.precipitation_mm - 3.0 * 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_climatology_precipitation_floor() {
        let dry = observation_from_climatology(&record(0.0), 1);
        assert_eq!(dry.precipitation_mm, MIN_PRECIPITATION_MM);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            /// Every date in the reliable window maps to a fetching strategy
            #[test]
            fn prop_reliable_dates_fetch(offset in -3650i64..=90i64) {
                let target = today() + Duration::days(offset);
                prop_assert!(reliable_window(today()).contains(target));
                prop_assert_ne!(select_source(target, today()), SourceStrategy::OutOfRange);
            }

            /// Anything past the reliable horizon is out of range
            #[test]
            fn prop_beyond_horizon_out_of_range(offset in 91i64..=2000i64) {
                let target = today() + Duration::days(offset);
                prop_assert_eq!(select_source(target, today()), SourceStrategy::OutOfRange);
            }

            /// Estimated precipitation never drops below the floor
            #[test]
            fn prop_climatology_precipitation_floor(precip in 0.0f64..=40.0f64, day in 1u32..=31u32) {
                let obs = observation_from_climatology(&record(precip), day);
                prop_assert!(obs.precipitation_mm >= MIN_PRECIPITATION_MM);
            }
        }
    }
}
