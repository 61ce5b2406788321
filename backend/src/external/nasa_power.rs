//! NASA POWER API client for point climate data
//!
//! Two endpoints are used: daily point values for past dates and multi-year
//! monthly climatology for upcoming dates. Both return
//! `properties.parameter.<NAME>.<key>`; anything else is malformed.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use shared::{
    month_from_key, Climatology, ClimatologyRecord, Coordinate, DailyObservation, RawObservation,
};
use tracing::{debug, instrument};

use super::ClimateDataProvider;
use crate::config::ClimateConfig;
use crate::error::{AppError, AppResult};

/// Value POWER uses for missing data
pub const FILL_VALUE: f64 = -999.0;

const DAILY_PARAMETERS: &str = "PRECTOTCORR,T2M,T2M_MAX,T2M_MIN,RH2M,WS2M";
const CLIMATOLOGY_PARAMETERS: &str = "PRECTOTCORR,T2M,RH2M,WS2M";

const T2M: &str = "T2M";
const RH2M: &str = "RH2M";
const PRECTOTCORR: &str = "PRECTOTCORR";
const WS2M: &str = "WS2M";

/// NASA POWER API client
#[derive(Clone)]
pub struct NasaPowerClient {
    client: Client,
    base_url: String,
    community: String,
}

/// POWER point response
#[derive(Debug, Deserialize)]
struct PowerResponse {
    properties: PowerProperties,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    parameter: HashMap<String, HashMap<String, f64>>,
}

impl NasaPowerClient {
    /// Create a new client from configuration
    pub fn new(config: &ClimateConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            community: config.community.clone(),
        })
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> AppResult<Self> {
        Self::new(&ClimateConfig {
            base_url,
            ..ClimateConfig::default()
        })
    }

    async fn fetch(&self, endpoint: &str, query: &[(&str, String)]) -> AppResult<PowerResponse> {
        let url = format!("{}/{}/point", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::SourceUnavailable(format!("NASA POWER request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::SourceUnavailable(format!(
                "NASA POWER API error: {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::MalformedData(format!("Failed to parse NASA POWER response: {}", e)))
    }
}

#[async_trait]
impl ClimateDataProvider for NasaPowerClient {
    #[instrument(skip(self), fields(service = "nasa_power", api_call = "daily_point"))]
    async fn daily_point(
        &self,
        coordinate: Coordinate,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DailyObservation>> {
        let query = [
            ("parameters", DAILY_PARAMETERS.to_string()),
            ("community", self.community.clone()),
            ("longitude", coordinate.longitude.to_string()),
            ("latitude", coordinate.latitude.to_string()),
            ("start", start.format("%Y%m%d").to_string()),
            ("end", end.format("%Y%m%d").to_string()),
            ("format", "JSON".to_string()),
        ];

        let data = self.fetch("daily", &query).await?;
        let observations = parse_daily(&data.properties.parameter)?;
        debug!("Received {} daily observations", observations.len());
        Ok(observations)
    }

    #[instrument(skip(self), fields(service = "nasa_power", api_call = "climatology_point"))]
    async fn climatology_point(
        &self,
        coordinate: Coordinate,
        start_year: i32,
        end_year: i32,
    ) -> AppResult<Climatology> {
        let query = [
            ("parameters", CLIMATOLOGY_PARAMETERS.to_string()),
            ("community", self.community.clone()),
            ("longitude", coordinate.longitude.to_string()),
            ("latitude", coordinate.latitude.to_string()),
            ("start", start_year.to_string()),
            ("end", end_year.to_string()),
            ("format", "JSON".to_string()),
        ];

        let data = self.fetch("climatology", &query).await?;
        let records = parse_climatology(&data.properties.parameter)?;
        debug!("Received {} climatology months", records.len());

        Ok(Climatology {
            start_year,
            end_year,
            records,
        })
    }
}

fn usable(value: Option<&f64>) -> Option<f64> {
    value.copied().filter(|v| v.is_finite() && *v > FILL_VALUE)
}

fn series<'a>(
    parameters: &'a HashMap<String, HashMap<String, f64>>,
    name: &str,
) -> AppResult<&'a HashMap<String, f64>> {
    parameters
        .get(name)
        .ok_or_else(|| AppError::MalformedData(format!("missing parameter {}", name)))
}

/// Daily observations for every date key where all four parameters hold real values
fn parse_daily(
    parameters: &HashMap<String, HashMap<String, f64>>,
) -> AppResult<Vec<DailyObservation>> {
    let temperature = series(parameters, T2M)?;
    let humidity = series(parameters, RH2M)?;
    let precipitation = series(parameters, PRECTOTCORR)?;
    let wind = series(parameters, WS2M)?;

    let mut observations: Vec<DailyObservation> = temperature
        .keys()
        .filter_map(|key| {
            let date = NaiveDate::parse_from_str(key, "%Y%m%d").ok()?;
            Some(DailyObservation {
                date,
                observation: RawObservation {
                    temperature_celsius: usable(temperature.get(key))?,
                    relative_humidity_percent: usable(humidity.get(key))?,
                    precipitation_mm: usable(precipitation.get(key))?,
                    wind_speed_mps: usable(wind.get(key))?,
                },
            })
        })
        .collect();

    observations.sort_by_key(|o| o.date);
    Ok(observations)
}

/// Monthly records; temperature and precipitation are required per month
fn parse_climatology(
    parameters: &HashMap<String, HashMap<String, f64>>,
) -> AppResult<Vec<ClimatologyRecord>> {
    let temperature = series(parameters, T2M)?;
    let precipitation = series(parameters, PRECTOTCORR)?;
    let humidity = parameters.get(RH2M);
    let wind = parameters.get(WS2M);

    let mut records: Vec<ClimatologyRecord> = temperature
        .keys()
        .filter_map(|key| {
            let month = month_from_key(key)?;
            Some(ClimatologyRecord {
                month,
                temperature_celsius: usable(temperature.get(key))?,
                precipitation_mm: usable(precipitation.get(key))?,
                relative_humidity_percent: humidity.and_then(|h| usable(h.get(key))),
                wind_speed_mps: wind.and_then(|w| usable(w.get(key))),
            })
        })
        .collect();

    records.sort_by_key(|r| r.month);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parameters(value: serde_json::Value) -> HashMap<String, HashMap<String, f64>> {
        let response: PowerResponse = serde_json::from_value(value).unwrap();
        response.properties.parameter
    }

    #[test]
    fn test_parse_daily_complete_day() {
        let params = parameters(json!({
            "properties": { "parameter": {
                "T2M": { "20240715": 28.4 },
                "T2M_MAX": { "20240715": 34.0 },
                "T2M_MIN": { "20240715": 21.2 },
                "RH2M": { "20240715": 48.1 },
                "PRECTOTCORR": { "20240715": 0.02 },
                "WS2M": { "20240715": 3.7 }
            }}
        }));

        let days = parse_daily(&params).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        assert_eq!(days[0].observation.temperature_celsius, 28.4);
        assert_eq!(days[0].observation.wind_speed_mps, 3.7);
    }

    #[test]
    fn test_parse_daily_skips_fill_values() {
        let params = parameters(json!({
            "properties": { "parameter": {
                "T2M": { "20240715": 28.4, "20240716": 27.0 },
                "RH2M": { "20240715": -999.0, "20240716": 50.0 },
                "PRECTOTCORR": { "20240715": 0.0, "20240716": 0.0 },
                "WS2M": { "20240715": 3.0, "20240716": 3.0 }
            }}
        }));

        let days = parse_daily(&params).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 7, 16).unwrap());
    }

    #[test]
    fn test_parse_daily_missing_parameter_is_malformed() {
        let params = parameters(json!({
            "properties": { "parameter": {
                "T2M": { "20240715": 28.4 },
                "RH2M": { "20240715": 40.0 },
                "PRECTOTCORR": { "20240715": 0.0 }
            }}
        }));

        assert!(matches!(parse_daily(&params), Err(AppError::MalformedData(_))));
    }

    #[test]
    fn test_parse_climatology_optional_humidity_and_wind() {
        let params = parameters(json!({
            "properties": { "parameter": {
                "T2M": { "JAN": 4.1, "JUL": 25.3, "ANN": 14.2 },
                "PRECTOTCORR": { "JAN": 2.9, "JUL": 0.6, "ANN": 1.8 }
            }}
        }));

        let records = parse_climatology(&params).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].month, 1);
        assert_eq!(records[1].month, 7);
        assert!(records[1].relative_humidity_percent.is_none());
        assert!(records[1].wind_speed_mps.is_none());
    }

    #[test]
    fn test_parse_climatology_requires_temperature() {
        let params = parameters(json!({
            "properties": { "parameter": {
                "PRECTOTCORR": { "JAN": 2.9 }
            }}
        }));

        assert!(parse_climatology(&params).is_err());
    }

    #[test]
    fn test_shape_mismatch_fails_to_deserialize() {
        let result: Result<PowerResponse, _> =
            serde_json::from_value(json!({ "messages": ["no data"] }));
        assert!(result.is_err());
    }
}
