//! HTTP handlers

pub mod analysis;
pub mod health;
pub mod reporting;

pub use analysis::analyze;
pub use health::health_check;
pub use reporting::export_analysis;
