//! Route definitions for the Event Weather Risk server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/analysis", analysis_routes())
}

/// Analysis routes
fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::analyze))
        .route("/export", get(handlers::export_analysis))
}
