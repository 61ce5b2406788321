//! Analysis service: resolves a request to an analysis outcome
//!
//! One provider call per analysis, no retries. Provider failures never reach
//! the caller; they are logged and replaced by the seasonal simulation.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::{
    build_window, climatology_years, observation_from_climatology, recommend, reliable_window,
    select_source, simulated_result, supported_window, validate_request, AnalysisOutcome,
    AnalysisRequest, AnalysisResult, ComparisonPoint, Confidence, Coordinate, DataSource,
    OutOfRangeNotice, Recommendation, SourceStrategy,
};
use tracing::{info, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::external::ClimateDataProvider;

/// Everything derived from one analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub outcome: AnalysisOutcome,
    /// Empty when the target is out of range
    pub comparison: Vec<ComparisonPoint>,
    /// Empty when the target is out of range
    pub recommendations: Vec<Recommendation>,
}

/// Service resolving analysis requests against a climate data provider
#[derive(Clone)]
pub struct AnalysisService {
    provider: Arc<dyn ClimateDataProvider>,
}

impl AnalysisService {
    /// Create a new AnalysisService instance
    pub fn new(provider: Arc<dyn ClimateDataProvider>) -> Self {
        Self { provider }
    }

    /// Resolve a request to a result or an out-of-range notice.
    ///
    /// Input is validated before any fetch. Dates past the reliable horizon
    /// return a notice without contacting the provider.
    #[instrument(
        skip(self, request),
        fields(
            target_date = %request.target_date,
            lat = %request.coordinate.latitude,
            lon = %request.coordinate.longitude,
        )
    )]
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
        today: NaiveDate,
    ) -> AppResult<AnalysisOutcome> {
        validate_request(request, today)?;

        let coordinate = request.coordinate;
        let target = request.target_date;

        let resolved = match select_source(target, today) {
            SourceStrategy::OutOfRange => {
                info!("Target date beyond reliable horizon, no fetch");
                return Ok(AnalysisOutcome::OutOfRange(OutOfRangeNotice {
                    target_date: target,
                    earliest_supported: supported_window(today).start,
                    latest_reliable: reliable_window(today).end,
                }));
            }
            SourceStrategy::HistoricalDaily => self.historical(coordinate, target).await,
            SourceStrategy::Climatology => self.climatology(coordinate, target, today).await,
        };

        let result = match resolved {
            Ok(result) => result,
            Err(e) => {
                warn!("Climate data unavailable, using simulation: {}", e);
                simulated_result(coordinate, target, today)?
            }
        };

        info!(
            source = result.source.as_str(),
            heat_index = result.heat_index,
            risk_level = result.risk_level.as_str(),
            "Analysis complete"
        );

        Ok(AnalysisOutcome::Analyzed(result))
    }

    /// Analyze and derive the comparison window and recommendation blocks
    pub async fn report(
        &self,
        request: &AnalysisRequest,
        today: NaiveDate,
    ) -> AppResult<AnalysisReport> {
        let outcome = self.analyze(request, today).await?;

        let (comparison, recommendations) = match outcome.result() {
            Some(result) => (
                build_window(result, today),
                recommend(&request.event_category, result),
            ),
            None => (Vec::new(), Vec::new()),
        };

        Ok(AnalysisReport {
            outcome,
            comparison,
            recommendations,
        })
    }

    /// Values observed on a past date
    async fn historical(
        &self,
        coordinate: Coordinate,
        target: NaiveDate,
    ) -> AppResult<AnalysisResult> {
        let days = self.provider.daily_point(coordinate, target, target).await?;

        let day = days
            .into_iter()
            .find(|d| d.date == target)
            .ok_or_else(|| AppError::MalformedData(format!("no usable values for {}", target)))?;

        AnalysisResult::derive(
            coordinate,
            target,
            day.observation,
            DataSource::Historical,
            Confidence::High,
            target.year().to_string(),
        )
        .map_err(|e| AppError::MalformedData(e.to_string()))
    }

    /// Multi-year monthly average adjusted for the day of month
    async fn climatology(
        &self,
        coordinate: Coordinate,
        target: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<AnalysisResult> {
        let (start_year, end_year) = climatology_years(today);
        let climatology = self
            .provider
            .climatology_point(coordinate, start_year, end_year)
            .await?;

        let record = climatology.month(target.month()).ok_or_else(|| {
            AppError::MalformedData(format!("no climatology for month {}", target.month()))
        })?;

        AnalysisResult::derive(
            coordinate,
            target,
            observation_from_climatology(record, target.day()),
            DataSource::Climatology,
            Confidence::High,
            climatology.period_label(),
        )
        .map_err(|e| AppError::MalformedData(e.to_string()))
    }
}
