//! Event Weather Risk - Backend Server
//!
//! Estimates heat and wind risk for outdoor events at a location and date
//! using NASA POWER climate data, with a seasonal simulation fallback.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use crate::error::AppResult;
use crate::external::{ClimateDataProvider, Geocoder, NasaPowerClient};
use crate::services::AnalysisService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analysis: AnalysisService,
    pub geocoder: Geocoder,
}

impl AppState {
    /// Build state with the NASA POWER client and Nominatim geocoder from configuration
    pub fn from_config(config: Config) -> AppResult<Self> {
        let provider = Arc::new(NasaPowerClient::new(&config.climate)?);
        Self::with_provider(config, provider)
    }

    /// Build state around a custom climate data provider
    pub fn with_provider(
        config: Config,
        provider: Arc<dyn ClimateDataProvider>,
    ) -> AppResult<Self> {
        let geocoder = Geocoder::new(&config.geocoding)?;
        Ok(Self {
            config: Arc::new(config),
            analysis: AnalysisService::new(provider),
            geocoder,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Event Weather Risk API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
