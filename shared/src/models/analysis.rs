//! Analysis request and result models

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::event::EventCategory;
use super::observation::RawObservation;
use super::risk::{classify_heat, classify_wind, heat_index, RiskLevel};
use crate::types::{Coordinate, DateRange};
use crate::validation::ValidationError;

/// Days on either side of the target covered by the analysis window
pub const ANALYSIS_WINDOW_DAYS: i64 = 2;

/// A user's analysis action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisRequest {
    pub coordinate: Coordinate,
    pub target_date: NaiveDate,
    pub event_category: EventCategory,
}

/// Where the weather values came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Historical,
    Climatology,
    Simulation,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Historical => "historical",
            DataSource::Climatology => "climatology",
            DataSource::Simulation => "simulation",
        }
    }

    /// Narrative accuracy note attached to results from this source
    pub fn accuracy(&self) -> AccuracyNote {
        match self {
            DataSource::Historical => AccuracyNote::ObservedHistory,
            DataSource::Climatology => AccuracyNote::ClimatologyEstimate,
            DataSource::Simulation => AccuracyNote::SimulatedEstimate,
        }
    }
}

/// Confidence label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
        }
    }
}

/// Locale-free accuracy note; rendered through the message catalogue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyNote {
    ObservedHistory,
    ClimatologyEstimate,
    SimulatedEstimate,
}

impl AccuracyNote {
    pub fn message_id(&self) -> &'static str {
        match self {
            AccuracyNote::ObservedHistory => "accuracy.historical",
            AccuracyNote::ClimatologyEstimate => "accuracy.climatology",
            AccuracyNote::SimulatedEstimate => "accuracy.simulation",
        }
    }
}

/// Derived analysis for one target date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub coordinate: Coordinate,
    pub target_date: NaiveDate,
    pub heat_index: f64,
    pub risk_level: RiskLevel,
    pub wind_risk_level: RiskLevel,
    pub source: DataSource,
    pub confidence: Confidence,
    pub observation: RawObservation,
    pub accuracy: AccuracyNote,
    /// Years the values are drawn from, e.g. "2019" or "2015-2024"
    pub reference_period: String,
    pub analysis_window: DateRange,
}

impl AnalysisResult {
    /// Derive index and tiers from an observation
    pub fn derive(
        coordinate: Coordinate,
        target_date: NaiveDate,
        observation: RawObservation,
        source: DataSource,
        confidence: Confidence,
        reference_period: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let index = heat_index(
            observation.temperature_celsius,
            observation.relative_humidity_percent,
        )?;

        Ok(Self {
            coordinate,
            target_date,
            heat_index: index,
            risk_level: classify_heat(index),
            wind_risk_level: classify_wind(observation.wind_speed_mps),
            source,
            confidence,
            observation,
            accuracy: source.accuracy(),
            reference_period: reference_period.into(),
            analysis_window: DateRange::new(
                target_date - Duration::days(ANALYSIS_WINDOW_DAYS),
                target_date + Duration::days(ANALYSIS_WINDOW_DAYS),
            ),
        })
    }
}

/// Returned instead of a result when the target is past the reliable horizon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutOfRangeNotice {
    pub target_date: NaiveDate,
    pub earliest_supported: NaiveDate,
    pub latest_reliable: NaiveDate,
}

/// Outcome of resolving a request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Analyzed(AnalysisResult),
    OutOfRange(OutOfRangeNotice),
}

impl AnalysisOutcome {
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisOutcome::Analyzed(result) => Some(result),
            AnalysisOutcome::OutOfRange(_) => None,
        }
    }
}
