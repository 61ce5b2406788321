//! Deterministic seasonal estimate used when live data is unavailable

use chrono::{Datelike, NaiveDate};

use crate::models::{AnalysisResult, Confidence, DataSource, RawObservation};
use crate::resolution::{climatology_years, day_of_month_factor, MIN_PRECIPITATION_MM};
use crate::types::Coordinate;
use crate::validation::ValidationError;

/// Seasonal baseline values
#[derive(Debug, Clone, Copy, PartialEq)]
struct SeasonBase {
    precipitation_mm: f64,
    temperature_celsius: f64,
    relative_humidity_percent: f64,
    wind_speed_mps: f64,
}

const WINTER: SeasonBase = SeasonBase {
    precipitation_mm: 3.5,
    temperature_celsius: 5.0,
    relative_humidity_percent: 70.0,
    wind_speed_mps: 4.0,
};

const SPRING: SeasonBase = SeasonBase {
    precipitation_mm: 2.0,
    temperature_celsius: 15.0,
    relative_humidity_percent: 65.0,
    wind_speed_mps: 3.5,
};

const SUMMER: SeasonBase = SeasonBase {
    precipitation_mm: 0.8,
    temperature_celsius: 27.0,
    relative_humidity_percent: 55.0,
    wind_speed_mps: 2.5,
};

const AUTUMN: SeasonBase = SeasonBase {
    precipitation_mm: 2.5,
    temperature_celsius: 18.0,
    relative_humidity_percent: 60.0,
    wind_speed_mps: 3.0,
};

fn season_for_month(month: u32) -> SeasonBase {
    match month {
        3..=5 => SPRING,
        6..=8 => SUMMER,
        9..=11 => AUTUMN,
        _ => WINTER,
    }
}

/// Synthetic observation for a calendar day.
///
/// Values drift linearly across the month around the seasonal base, centred
/// on the 15th.
pub fn simulate(month: u32, day: u32) -> RawObservation {
    let base = season_for_month(month);
    let offset = f64::from(day) - 15.0;

    RawObservation {
        temperature_celsius: base.temperature_celsius + offset * 0.1,
        relative_humidity_percent: base.relative_humidity_percent,
        precipitation_mm: (base.precipitation_mm * day_of_month_factor(day, 0.4))
            .max(MIN_PRECIPITATION_MM),
        wind_speed_mps: base.wind_speed_mps + offset * 0.05,
    }
}

/// Build a complete simulation-sourced result for a target date
pub fn simulated_result(
    coordinate: Coordinate,
    target_date: NaiveDate,
    today: NaiveDate,
) -> Result<AnalysisResult, ValidationError> {
    let (start_year, end_year) = climatology_years(today);
    AnalysisResult::derive(
        coordinate,
        target_date,
        simulate(target_date.month(), target_date.day()),
        DataSource::Simulation,
        Confidence::Medium,
        format!("{}-{}", start_year, end_year),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mid_month_equals_season_base() {
        let summer = simulate(7, 15);
        assert_eq!(summer.temperature_celsius, 27.0);
        assert_eq!(summer.relative_humidity_percent, 55.0);
        assert_eq!(summer.precipitation_mm, 0.8);
        assert_eq!(summer.wind_speed_mps, 2.5);

        let winter = simulate(1, 15);
        assert_eq!(winter.temperature_celsius, 5.0);
        assert_eq!(winter.precipitation_mm, 3.5);
    }

    #[test]
    fn test_december_is_winter() {
        assert_eq!(simulate(12, 15), simulate(2, 15));
    }

    #[test]
    fn test_day_adjustments() {
        // October 25: autumn base shifted ten days past mid-month
        let obs = simulate(10, 25);
        assert!((obs.temperature_celsius - 19.0).abs() < 1e-9);
        assert!((obs.wind_speed_mps - 3.5).abs() < 1e-9);
        assert!((obs.precipitation_mm - 2.5 * (1.0 + 10.0 / 30.0 * 0.4)).abs() < 1e-9);
        assert_eq!(obs.relative_humidity_percent, 60.0);
    }

    #[test]
    fn test_precipitation_never_below_floor() {
        for month in 1..=12 {
            for day in 1..=31 {
                assert!(simulate(month, day).precipitation_mm >= MIN_PRECIPITATION_MM);
            }
        }
    }

    #[test]
    fn test_simulated_result_labels() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let target = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let coordinate = Coordinate::new(39.93, 32.86).unwrap();

        let result = simulated_result(coordinate, target, today).unwrap();
        assert_eq!(result.source, DataSource::Simulation);
        assert_eq!(result.confidence, Confidence::Medium);
        assert_eq!(result.reference_period, "2015-2024");
        assert_eq!(result.observation, simulate(6, 10));
    }
}
