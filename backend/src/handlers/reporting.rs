//! Report export handlers

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use shared::messages::out_of_range_text;
use shared::{AnalysisOutcome, EventCategory, Language};

use super::analysis::{build_request, parse_language};
use crate::error::{AppError, AppResult};
use crate::services::ReportingService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub target_date: NaiveDate,
    pub event_category: Option<EventCategory>,
    pub language: Option<String>,
    pub format: Option<String>, // "csv" or "text"
}

/// Export an analysis as CSV or a plain text report
pub async fn export_analysis(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> AppResult<Response> {
    let language = parse_language(query.language.as_deref())?;
    let request = build_request(
        query.latitude,
        query.longitude,
        query.target_date,
        query.event_category,
    )?;
    let today = Utc::now().date_naive();

    let report = state.analysis.report(&request, today).await?;
    let result = match &report.outcome {
        AnalysisOutcome::Analyzed(result) => result,
        AnalysisOutcome::OutOfRange(notice) => {
            let (message, _) = out_of_range_text(notice, Language::English);
            let (message_tr, _) = out_of_range_text(notice, Language::Turkish);
            return Err(AppError::BadRequest {
                field: "target_date".to_string(),
                message,
                message_tr,
            });
        }
    };

    match query.format.as_deref().unwrap_or("csv") {
        "csv" => {
            let rows = ReportingService::comparison_rows(result, &report.comparison, language);
            let csv = ReportingService::export_to_csv(&rows)?;
            Ok((
                [(header::CONTENT_TYPE, "text/csv"), (header::CONTENT_DISPOSITION, "attachment; filename=\"weather_data.csv\"")],
                csv,
            ).into_response())
        }
        "text" => {
            let place_name = state.geocoder.place_name(request.coordinate).await;
            let body =
                ReportingService::text_report(result, &report.comparison, &place_name, language);
            Ok((
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8"), (header::CONTENT_DISPOSITION, "attachment; filename=\"weather_report.txt\"")],
                body,
            ).into_response())
        }
        other => Err(AppError::BadRequest {
            field: "format".to_string(),
            message: format!("Unsupported export format: {}", other),
            message_tr: format!("Desteklenmeyen dışa aktarma biçimi: {}", other),
        }),
    }
}
