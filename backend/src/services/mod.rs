//! Business logic services for the Event Weather Risk server

pub mod analysis;
pub mod reporting;

pub use analysis::{AnalysisReport, AnalysisService};
pub use reporting::ReportingService;
