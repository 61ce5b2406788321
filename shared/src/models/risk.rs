//! Heat-stress index and risk tiers

use serde::{Deserialize, Serialize};

use crate::validation::{validate_finite, ValidationError};

/// Index value at which heat risk becomes medium
pub const HEAT_MEDIUM_THRESHOLD: f64 = 72.0;
/// Index value at which heat risk becomes high
pub const HEAT_HIGH_THRESHOLD: f64 = 79.0;
/// Wind speed (m/s) at which wind risk becomes medium
pub const WIND_MEDIUM_THRESHOLD_MPS: f64 = 5.0;
/// Wind speed (m/s) at which wind risk becomes high
pub const WIND_HIGH_THRESHOLD_MPS: f64 = 10.0;

/// Discrete risk tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Temperature-humidity index (THI) in °F-like units.
///
/// `THI = (1.8 T + 32) - (0.55 - 0.0055 RH) (1.8 T - 26)`
pub fn heat_index(temperature_celsius: f64, relative_humidity_percent: f64) -> Result<f64, ValidationError> {
    validate_finite("temperature_celsius", temperature_celsius)?;
    validate_finite("relative_humidity_percent", relative_humidity_percent)?;

    let t = temperature_celsius;
    let rh = relative_humidity_percent;
    Ok((1.8 * t + 32.0) - ((0.55 - 0.0055 * rh) * (1.8 * t - 26.0)))
}

/// Classify heat stress. NaN lands in the high tier.
pub fn classify_heat(index: f64) -> RiskLevel {
    if index < HEAT_MEDIUM_THRESHOLD {
        RiskLevel::Low
    } else if index < HEAT_HIGH_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Classify wind speed in m/s. NaN lands in the high tier.
pub fn classify_wind(speed_mps: f64) -> RiskLevel {
    if speed_mps < WIND_MEDIUM_THRESHOLD_MPS {
        RiskLevel::Low
    } else if speed_mps < WIND_HIGH_THRESHOLD_MPS {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
