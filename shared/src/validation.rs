//! Input validation for analysis requests
//!
//! Everything here runs before any data source is contacted.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::AnalysisRequest;
use crate::resolution::supported_window;

/// Rejected input
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfBounds {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("target_date {date} is before the earliest supported date {earliest}")]
    DateTooEarly { date: NaiveDate, earliest: NaiveDate },
}

impl ValidationError {
    /// Name of the offending request field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NonFinite { field } => *field,
            ValidationError::OutOfBounds { field, .. } => *field,
            ValidationError::DateTooEarly { .. } => "target_date",
        }
    }
}

/// Reject NaN and infinities
pub fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field })
    }
}

fn validate_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfBounds {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Validate latitude is within [-90, 90]
pub fn validate_latitude(latitude: f64) -> Result<(), ValidationError> {
    validate_range("latitude", latitude, -90.0, 90.0)
}

/// Validate longitude is within [-180, 180]
pub fn validate_longitude(longitude: f64) -> Result<(), ValidationError> {
    validate_range("longitude", longitude, -180.0, 180.0)
}

/// Validate the target date is not older than the historical archive we query.
///
/// Dates past the reliable horizon are not rejected here; they resolve to an
/// out-of-range notice instead.
pub fn validate_target_date(target: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    let window = supported_window(today);
    if target < window.start {
        return Err(ValidationError::DateTooEarly {
            date: target,
            earliest: window.start,
        });
    }
    Ok(())
}

/// Validate a complete analysis request
pub fn validate_request(request: &AnalysisRequest, today: NaiveDate) -> Result<(), ValidationError> {
    validate_latitude(request.coordinate.latitude)?;
    validate_longitude(request.coordinate.longitude)?;
    validate_target_date(request.target_date, today)
}
