//! External API integrations

pub mod geocoding;
pub mod nasa_power;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{Climatology, Coordinate, DailyObservation};

use crate::error::AppResult;

pub use geocoding::Geocoder;
pub use nasa_power::NasaPowerClient;

/// Source of point climate data.
///
/// Errors are `AppError::SourceUnavailable` for transport failures and
/// `AppError::MalformedData` for unexpected payloads.
#[async_trait]
pub trait ClimateDataProvider: Send + Sync {
    /// Daily observations for an inclusive date range
    async fn daily_point(
        &self,
        coordinate: Coordinate,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DailyObservation>>;

    /// Monthly averages over an inclusive year range
    async fn climatology_point(
        &self,
        coordinate: Coordinate,
        start_year: i32,
        end_year: i32,
    ) -> AppResult<Climatology>;
}
