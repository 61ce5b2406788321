//! HTTP handlers for event weather analysis

use axum::{extract::State, Json};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::messages::{
    accuracy_text, localize, out_of_range_text, risk_label, source_label, LocalizedRecommendation,
};
use shared::{
    AnalysisOutcome, AnalysisRequest, ComparisonPoint, Coordinate, EventCategory, Language,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Request body for an analysis
#[derive(Debug, Deserialize)]
pub struct AnalysisInput {
    pub latitude: f64,
    pub longitude: f64,
    pub target_date: NaiveDate,
    pub event_category: Option<EventCategory>,
    pub language: Option<String>,
}

/// Localized labels for an analyzed date
#[derive(Debug, Serialize)]
pub struct ResultSummary {
    pub risk: String,
    pub source: String,
    pub accuracy: String,
}

/// Localized text for an out-of-range date
#[derive(Debug, Serialize)]
pub struct NoticeText {
    pub message: String,
    pub recommendation: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub language: Language,
    pub place_name: String,
    pub outcome: AnalysisOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ResultSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<NoticeText>,
    pub comparison: Vec<ComparisonPoint>,
    pub recommendations: Vec<LocalizedRecommendation>,
}

/// Resolve an optional language code, defaulting to Turkish
pub fn parse_language(code: Option<&str>) -> AppResult<Language> {
    match code {
        None => Ok(Language::default()),
        Some(code) => Language::from_code(code).ok_or_else(|| AppError::BadRequest {
            field: "language".to_string(),
            message: format!("Unsupported language: {}", code),
            message_tr: format!("Desteklenmeyen dil: {}", code),
        }),
    }
}

/// Build a validated-coordinate request from raw fields
pub fn build_request(
    latitude: f64,
    longitude: f64,
    target_date: NaiveDate,
    event_category: Option<EventCategory>,
) -> AppResult<AnalysisRequest> {
    Ok(AnalysisRequest {
        coordinate: Coordinate::new(latitude, longitude)?,
        target_date,
        event_category: event_category.unwrap_or(EventCategory::Other),
    })
}

/// Run an analysis for a location, date and event
pub async fn analyze(
    State(state): State<AppState>,
    Json(input): Json<AnalysisInput>,
) -> AppResult<Json<AnalysisResponse>> {
    let language = parse_language(input.language.as_deref())?;
    let request = build_request(
        input.latitude,
        input.longitude,
        input.target_date,
        input.event_category,
    )?;
    let today = Utc::now().date_naive();

    let report = state.analysis.report(&request, today).await?;
    let place_name = state.geocoder.place_name(request.coordinate).await;

    let summary = report.outcome.result().map(|result| ResultSummary {
        risk: risk_label(result.risk_level, language).to_string(),
        source: source_label(result.source, language).to_string(),
        accuracy: accuracy_text(result.accuracy, language).to_string(),
    });

    let notice = match &report.outcome {
        AnalysisOutcome::OutOfRange(notice) => {
            let (message, recommendation) = out_of_range_text(notice, language);
            Some(NoticeText {
                message,
                recommendation,
            })
        }
        AnalysisOutcome::Analyzed(_) => None,
    };

    let recommendations = report
        .recommendations
        .iter()
        .map(|rec| localize(rec, &place_name, language))
        .collect();

    Ok(Json(AnalysisResponse {
        analysis_id: Uuid::new_v4(),
        language,
        place_name,
        outcome: report.outcome,
        summary,
        notice,
        comparison: report.comparison,
        recommendations,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!(parse_language(None).unwrap(), Language::Turkish);
        assert_eq!(parse_language(Some("en")).unwrap(), Language::English);
        assert!(parse_language(Some("de")).is_err());
    }

    #[test]
    fn test_build_request_defaults_category() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let request = build_request(39.0, 35.0, date, None).unwrap();
        assert_eq!(request.event_category, EventCategory::Other);
    }

    #[test]
    fn test_build_request_rejects_bad_latitude() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let result = build_request(120.0, 35.0, date, None);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
