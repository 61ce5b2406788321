//! Configuration management for the Event Weather Risk server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with EWR_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// NASA POWER climate data configuration
    pub climate: ClimateConfig,

    /// Reverse geocoding configuration
    pub geocoding: GeocodingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClimateConfig {
    /// NASA POWER API base URL
    pub base_url: String,

    /// POWER community parameter
    pub community: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    /// Nominatim base URL
    pub base_url: String,

    /// User-Agent sent to Nominatim, required by its usage policy
    pub user_agent: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// When false, place names fall back to coordinates without any request
    pub enabled: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("EWR_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("climate.base_url", ClimateConfig::default().base_url)?
            .set_default("climate.community", "RE")?
            .set_default("climate.timeout_secs", 30)?
            .set_default("geocoding.base_url", GeocodingConfig::default().base_url)?
            .set_default("geocoding.user_agent", GeocodingConfig::default().user_agent)?
            .set_default("geocoding.timeout_secs", 5)?
            .set_default("geocoding.enabled", true)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (EWR_ prefix)
            .add_source(
                Environment::with_prefix("EWR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            climate: ClimateConfig::default(),
            geocoding: GeocodingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            base_url: "https://power.larc.nasa.gov/api/temporal".to_string(),
            community: "RE".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "event-weather-risk/0.1".to_string(),
            timeout_secs: 5,
            enabled: true,
        }
    }
}
