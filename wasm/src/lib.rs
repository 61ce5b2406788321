//! WebAssembly module for Event Weather Risk
//!
//! Provides client-side computation for:
//! - Heat-stress index and risk tiers
//! - Seasonal simulation when the API is unreachable
//! - Comparison window and recommendation rendering

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::messages::localize;
use shared::simulated_result;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    log("event weather risk module loaded");
}

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

fn js_error(context: &str, error: impl std::fmt::Display) -> JsValue {
    let message = format!("{}: {}", context, error);
    log(&message);
    JsValue::from_str(&message)
}

fn parse_date(date: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| e.to_string())
}

/// Temperature-humidity index, NaN when inputs are not finite
#[wasm_bindgen]
pub fn temperature_humidity_index(temperature_celsius: f64, humidity_percent: f64) -> f64 {
    heat_index(temperature_celsius, humidity_percent).unwrap_or(f64::NAN)
}

/// Heat risk tier for an index value ("low", "medium", "high")
#[wasm_bindgen]
pub fn heat_risk(index: f64) -> String {
    classify_heat(index).to_string()
}

/// Wind risk tier for a speed in m/s
#[wasm_bindgen]
pub fn wind_risk(speed_mps: f64) -> String {
    classify_wind(speed_mps).to_string()
}

/// Offline estimate for a location and date, serialized as JSON
pub fn simulate_json(
    latitude: f64,
    longitude: f64,
    target_date: &str,
    today: &str,
) -> Result<String, String> {
    let coordinate = Coordinate::new(latitude, longitude).map_err(|e| e.to_string())?;
    let result = simulated_result(coordinate, parse_date(target_date)?, parse_date(today)?)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&result).map_err(|e| e.to_string())
}

/// Nearby-date comparison for an analysis result JSON
pub fn comparison_json(result_json: &str, today: &str) -> Result<String, String> {
    let result: AnalysisResult = serde_json::from_str(result_json).map_err(|e| e.to_string())?;
    let points = build_window(&result, parse_date(today)?);
    serde_json::to_string(&points).map_err(|e| e.to_string())
}

/// Localized recommendation blocks for an analysis result JSON
pub fn recommendations_json(
    result_json: &str,
    event_label: &str,
    place: &str,
    language_code: &str,
) -> Result<String, String> {
    let result: AnalysisResult = serde_json::from_str(result_json).map_err(|e| e.to_string())?;
    let language = Language::from_code(language_code)
        .ok_or_else(|| format!("unsupported language {}", language_code))?;
    let category = EventCategory::from_label(event_label);

    let rendered: Vec<_> = recommend(&category, &result)
        .iter()
        .map(|rec| localize(rec, place, language))
        .collect();
    serde_json::to_string(&rendered).map_err(|e| e.to_string())
}

/// Seasonal estimate used when the server cannot be reached
#[wasm_bindgen]
pub fn simulate_offline(
    latitude: f64,
    longitude: f64,
    target_date: &str,
    today: &str,
) -> Result<String, JsValue> {
    simulate_json(latitude, longitude, target_date, today)
        .map_err(|e| js_error("Simulation failed", e))
}

#[wasm_bindgen]
pub fn comparison_window(result_json: &str, today: &str) -> Result<String, JsValue> {
    comparison_json(result_json, today).map_err(|e| js_error("Invalid analysis JSON", e))
}

#[wasm_bindgen]
pub fn recommendations(
    result_json: &str,
    event_label: &str,
    place: &str,
    language_code: &str,
) -> Result<String, JsValue> {
    recommendations_json(result_json, event_label, place, language_code)
        .map_err(|e| js_error("Invalid analysis JSON", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_risk_tiers() {
        assert_eq!(heat_risk(65.0), "low");
        assert_eq!(heat_risk(72.0), "medium");
        assert_eq!(heat_risk(85.0), "high");
        assert_eq!(heat_risk(f64::NAN), "high");
    }

    #[test]
    fn test_wind_risk_tiers() {
        assert_eq!(wind_risk(2.0), "low");
        assert_eq!(wind_risk(7.5), "medium");
        assert_eq!(wind_risk(12.0), "high");
    }

    #[test]
    fn test_index_rejects_non_finite() {
        assert!(temperature_humidity_index(f64::INFINITY, 50.0).is_nan());
        let thi = temperature_humidity_index(30.0, 100.0);
        assert!((thi - 86.0).abs() < 1e-9);
    }

    #[test]
    fn test_simulation_round_trip_through_window() {
        let json = simulate_json(41.01, 28.97, "2025-07-14", "2025-06-15").unwrap();
        let points: Vec<ComparisonPoint> =
            serde_json::from_str(&comparison_json(&json, "2025-06-15").unwrap()).unwrap();
        assert_eq!(points.len(), 7);
        assert_eq!(points.iter().filter(|p| p.is_target).count(), 1);
    }

    #[test]
    fn test_recommendations_localized() {
        let json = simulate_json(41.01, 28.97, "2025-07-14", "2025-06-15").unwrap();
        let rendered = recommendations_json(&json, "Düğün", "İstanbul", "tr").unwrap();
        assert!(rendered.contains("Düğün için ekstra hazırlıklar:"));
        assert!(recommendations_json(&json, "Düğün", "İstanbul", "fr").is_err());
    }

    #[test]
    fn test_bad_date_is_error() {
        assert!(simulate_json(41.0, 29.0, "14.07.2025", "2025-06-15").is_err());
    }
}
