//! Reverse geocoding via Nominatim
//!
//! Place names are cosmetic: every failure degrades to the coordinate label.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use shared::Coordinate;
use tracing::{debug, instrument, warn};

use crate::config::GeocodingConfig;
use crate::error::{AppError, AppResult};

/// Nominatim reverse geocoding client
#[derive(Clone)]
pub struct Geocoder {
    client: Client,
    base_url: String,
    enabled: bool,
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    display_name: String,
}

impl Geocoder {
    /// Create a new geocoder from configuration
    pub fn new(config: &GeocodingConfig) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build geocoding client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            enabled: config.enabled,
        })
    }

    /// Geocoder that never leaves the process
    pub fn disabled() -> AppResult<Self> {
        Self::new(&GeocodingConfig {
            enabled: false,
            ..GeocodingConfig::default()
        })
    }

    #[instrument(skip(self), fields(service = "nominatim", api_call = "reverse_geocode"))]
    async fn fetch_display_name(&self, coordinate: Coordinate) -> AppResult<String> {
        let url = format!("{}/reverse", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "json".to_string()),
                ("lat", coordinate.latitude.to_string()),
                ("lon", coordinate.longitude.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Reverse geocoding request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "Reverse geocoding API returned status: {}",
                response.status()
            )));
        }

        let data: NominatimResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse reverse geocoding response: {}", e))
        })?;

        Ok(data.display_name)
    }

    /// Human-readable place name, or `"lat, lon"` when unavailable
    pub async fn place_name(&self, coordinate: Coordinate) -> String {
        if !self.enabled {
            return coordinate.label();
        }

        match self.fetch_display_name(coordinate).await {
            Ok(name) if !name.trim().is_empty() => {
                debug!("Resolved {} to {}", coordinate, name);
                name
            }
            Ok(_) => coordinate.label(),
            Err(e) => {
                warn!("Reverse geocoding failed, using coordinates: {}", e);
                coordinate.label()
            }
        }
    }
}
