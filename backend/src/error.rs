//! Error handling for the Event Weather Risk server
//!
//! Provides consistent error responses in Turkish and English

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::ValidationError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Invalid request: {message}")]
    BadRequest {
        field: String,
        message: String,
        message_tr: String,
    },

    // Data source errors, recovered by simulation inside the analysis service
    #[error("Climate data source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Malformed climate data: {0}")]
    MalformedData(String),

    // External service errors
    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_tr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Turkish rendering of a validation error
fn validation_message_tr(error: &ValidationError) -> String {
    match error {
        ValidationError::NonFinite { field } => format!("{} geçerli bir sayı olmalıdır", field),
        ValidationError::OutOfBounds {
            field,
            value,
            min,
            max,
        } => format!("{} {} ile {} arasında olmalıdır, alınan değer {}", field, min, max, value),
        ValidationError::DateTooEarly { date, earliest } => format!(
            "{} tarihi desteklenen en erken tarihten ({}) önce",
            date, earliest
        ),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::InvalidInput(error) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_INPUT".to_string(),
                    message_en: error.to_string(),
                    message_tr: validation_message_tr(error),
                    field: Some(error.field().to_string()),
                },
            ),
            AppError::BadRequest {
                field,
                message,
                message_tr,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_INPUT".to_string(),
                    message_en: message.clone(),
                    message_tr: message_tr.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::SourceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "SOURCE_UNAVAILABLE".to_string(),
                    message_en: format!("Climate data source unavailable: {}", msg),
                    message_tr: format!("İklim veri kaynağına ulaşılamıyor: {}", msg),
                    field: None,
                },
            ),
            AppError::MalformedData(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "MALFORMED_DATA".to_string(),
                    message_en: format!("Malformed climate data: {}", msg),
                    message_tr: format!("Hatalı iklim verisi: {}", msg),
                    field: None,
                },
            ),
            AppError::ExternalService(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "EXTERNAL_SERVICE_ERROR".to_string(),
                    message_en: format!("External service error: {}", msg),
                    message_tr: format!("Harici servis hatası: {}", msg),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_tr: format!("Yapılandırma hatası: {}", msg),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_tr: "Sunucu içinde bir hata oluştu".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
