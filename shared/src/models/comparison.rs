//! Neighbouring-date comparison window

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::analysis::AnalysisResult;
use super::risk::{classify_heat, classify_wind, RiskLevel};
use crate::resolution::{supported_window, MIN_PRECIPITATION_MM};

/// Days compared on each side of the target
pub const COMPARISON_RADIUS: i64 = 3;

/// One date in the comparison window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonPoint {
    pub date: NaiveDate,
    pub offset: i64,
    pub precipitation_mm: f64,
    pub heat_index: f64,
    pub wind_speed_mps: f64,
    pub risk_level: RiskLevel,
    pub wind_risk_level: RiskLevel,
    pub is_target: bool,
}

/// Precipitation multiplier for an offset; even offsets dampen, odd ones amplify
fn precipitation_variation(offset: i64) -> f64 {
    let sign = if offset % 2 == 0 { -1.0 } else { 1.0 };
    1.0 + 0.1 * offset.abs() as f64 * sign
}

/// Build the +/-3 day window around a result.
///
/// The target point is copied from the result unchanged. Neighbours are
/// perturbed deterministically and reclassified. Dates outside the supported
/// window are skipped.
pub fn build_window(result: &AnalysisResult, today: NaiveDate) -> Vec<ComparisonPoint> {
    let supported = supported_window(today);

    (-COMPARISON_RADIUS..=COMPARISON_RADIUS)
        .filter_map(|offset| {
            let date = result.target_date + Duration::days(offset);
            if !supported.contains(date) {
                return None;
            }

            if offset == 0 {
                return Some(ComparisonPoint {
                    date,
                    offset,
                    precipitation_mm: result.observation.precipitation_mm,
                    heat_index: result.heat_index,
                    wind_speed_mps: result.observation.wind_speed_mps,
                    risk_level: result.risk_level,
                    wind_risk_level: result.wind_risk_level,
                    is_target: true,
                });
            }

            let precipitation = (result.observation.precipitation_mm
                * precipitation_variation(offset))
            .max(MIN_PRECIPITATION_MM);
            let heat_index = result.heat_index + 0.5 * offset as f64;
            let wind_speed = result.observation.wind_speed_mps + 0.1 * offset as f64;

            Some(ComparisonPoint {
                date,
                offset,
                precipitation_mm: precipitation,
                heat_index,
                wind_speed_mps: wind_speed,
                risk_level: classify_heat(heat_index),
                wind_risk_level: classify_wind(wind_speed),
                is_target: false,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Confidence, DataSource, RawObservation};
    use crate::types::Coordinate;

    fn result_for(target: NaiveDate, temp: f64) -> AnalysisResult {
        AnalysisResult::derive(
            Coordinate::new(38.42, 27.14).unwrap(),
            target,
            RawObservation {
                temperature_celsius: temp,
                relative_humidity_percent: 60.0,
                precipitation_mm: 2.0,
                wind_speed_mps: 4.95,
            },
            DataSource::Climatology,
            Confidence::High,
            "2015-2024",
        )
        .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_full_window_has_seven_points() {
        let result = result_for(today(), 24.0);
        let points = build_window(&result, today());

        assert_eq!(points.len(), 7);
        assert_eq!(points.iter().filter(|p| p.is_target).count(), 1);
        let offsets: Vec<i64> = points.iter().map(|p| p.offset).collect();
        assert_eq!(offsets, vec![-3, -2, -1, 0, 1, 2, 3]);
    }

    #[test]
    fn test_target_point_copies_result() {
        let result = result_for(today(), 24.0);
        let points = build_window(&result, today());
        let target = points.iter().find(|p| p.is_target).unwrap();

        assert_eq!(target.date, result.target_date);
        assert_eq!(target.heat_index, result.heat_index);
        assert_eq!(target.precipitation_mm, result.observation.precipitation_mm);
        assert_eq!(target.risk_level, result.risk_level);
        assert_eq!(target.wind_risk_level, result.wind_risk_level);
    }

    #[test]
    fn test_alternating_precipitation_perturbation() {
        let result = result_for(today(), 24.0);
        let points = build_window(&result, today());
        let by_offset = |o: i64| points.iter().find(|p| p.offset == o).unwrap();

        assert!((by_offset(1).precipitation_mm - 2.2).abs() < 1e-9);
        assert!((by_offset(2).precipitation_mm - 1.6).abs() < 1e-9);
        assert!((by_offset(3).precipitation_mm - 2.6).abs() < 1e-9);
        assert!((by_offset(-1).precipitation_mm - 2.2).abs() < 1e-9);
        assert!((by_offset(-2).precipitation_mm - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_neighbours_are_reclassified() {
        let result = result_for(today(), 24.0);
        let points = build_window(&result, today());

        for point in &points {
            assert_eq!(point.risk_level, classify_heat(point.heat_index));
            assert_eq!(point.wind_risk_level, classify_wind(point.wind_speed_mps));
        }
        // 4.95 m/s + 0.1 crosses into the medium wind tier
        let plus_one = points.iter().find(|p| p.offset == 1).unwrap();
        assert_eq!(plus_one.wind_risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_points_outside_supported_window_dropped() {
        let earliest = supported_window(today()).start;
        let result = result_for(earliest + Duration::days(1), 10.0);
        let points = build_window(&result, today());

        assert_eq!(points.len(), 5);
        assert!(points.iter().all(|p| p.date >= earliest));
    }
}
