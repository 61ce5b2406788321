//! HTTP API tests
//!
//! Drives the full router with an in-process climate provider and geocoding
//! disabled, so no request leaves the test.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use chrono::{Duration, NaiveDate, Utc};
use ewr_server::config::{Config, GeocodingConfig};
use ewr_server::error::{AppError, AppResult};
use ewr_server::external::ClimateDataProvider;
use ewr_server::{create_app, AppState};
use serde_json::{json, Value};
use shared::{Climatology, Coordinate, DailyObservation};
use tower::ServiceExt;

/// Provider that is always down
struct UnavailableProvider;

#[async_trait]
impl ClimateDataProvider for UnavailableProvider {
    async fn daily_point(
        &self,
        _coordinate: Coordinate,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> AppResult<Vec<DailyObservation>> {
        Err(AppError::SourceUnavailable("offline".into()))
    }

    async fn climatology_point(
        &self,
        _coordinate: Coordinate,
        _start_year: i32,
        _end_year: i32,
    ) -> AppResult<Climatology> {
        Err(AppError::SourceUnavailable("offline".into()))
    }
}

fn app() -> axum::Router {
    let config = Config {
        geocoding: GeocodingConfig {
            enabled: false,
            ..GeocodingConfig::default()
        },
        ..Config::default()
    };
    let state = AppState::with_provider(config, Arc::new(UnavailableProvider)).unwrap();
    create_app(state)
}

async fn post_analysis(body: Value) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/analysis")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(uri: &str) -> (StatusCode, String) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

// ============================================================================
// Analysis
// ============================================================================

#[tokio::test]
async fn test_invalid_latitude_is_bad_request() {
    let (status, body) = post_analysis(json!({
        "latitude": 95.0,
        "longitude": 28.97,
        "target_date": today().to_string(),
        "event_category": "Wedding"
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert_eq!(body["error"]["field"], "latitude");
    assert!(body["error"]["message_tr"].is_string());
}

#[tokio::test]
async fn test_far_future_date_is_out_of_range() {
    let target = today() + Duration::days(200);
    let (status, body) = post_analysis(json!({
        "latitude": 41.01,
        "longitude": 28.97,
        "target_date": target.to_string(),
        "event_category": "Konser",
        "language": "en"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"]["status"], "out_of_range");
    assert!(body["notice"]["message"]
        .as_str()
        .unwrap()
        .contains("beyond 3 months"));
    assert_eq!(body["comparison"].as_array().unwrap().len(), 0);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_unavailable_source_returns_simulation() {
    let target = today() - Duration::days(5);
    let (status, body) = post_analysis(json!({
        "latitude": 39.93,
        "longitude": 32.86,
        "target_date": target.to_string(),
        "event_category": "Picnic"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"]["status"], "analyzed");
    assert_eq!(body["outcome"]["source"], "simulation");
    assert_eq!(body["outcome"]["confidence"], "medium");
    assert_eq!(body["place_name"], "39.93, 32.86");
    assert_eq!(body["language"], "turkish");
    assert_eq!(body["summary"]["source"], "Simülasyon");
    assert_eq!(body["comparison"].as_array().unwrap().len(), 7);
    assert!(body["analysis_id"].is_string());

    let recommendations = body["recommendations"].as_array().unwrap();
    assert!(!recommendations.is_empty());
    assert_eq!(
        recommendations.last().unwrap()["message"],
        "Piknik için ekstra hazırlıklar:"
    );
}

#[tokio::test]
async fn test_unknown_language_is_bad_request() {
    let (status, body) = post_analysis(json!({
        "latitude": 39.93,
        "longitude": 32.86,
        "target_date": today().to_string(),
        "language": "de"
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "language");
}

// ============================================================================
// Export
// ============================================================================

#[tokio::test]
async fn test_csv_export() {
    let target = today() - Duration::days(3);
    let uri = format!(
        "/api/v1/analysis/export?latitude=38.42&longitude=27.14&target_date={}&event_category=Festival&language=en&format=csv",
        target
    );
    let (status, body) = get(&uri).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("date,offset,"));
    assert_eq!(body.lines().count(), 8);
}

#[tokio::test]
async fn test_text_export() {
    let target = today() - Duration::days(3);
    let uri = format!(
        "/api/v1/analysis/export?latitude=38.42&longitude=27.14&target_date={}&language=en&format=text",
        target
    );
    let (status, body) = get(&uri).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("NASA POWER Weather Report"));
    assert!(body.contains("Location: 38.42, 27.14"));
}

#[tokio::test]
async fn test_export_out_of_range_is_bad_request() {
    let target = today() + Duration::days(150);
    let uri = format!(
        "/api/v1/analysis/export?latitude=38.42&longitude=27.14&target_date={}",
        target
    );
    let (status, _) = get(&uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["geocoding"], "disabled");
}
