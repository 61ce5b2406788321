//! Shared types and models for the Event Weather Risk estimator
//!
//! This crate holds the pure analysis core used by the backend and by the
//! browser build (via WASM). Nothing here performs I/O.

pub mod messages;
pub mod models;
pub mod resolution;
pub mod simulation;
pub mod types;
pub mod validation;

pub use models::*;
pub use resolution::*;
pub use simulation::*;
pub use types::*;
pub use validation::*;
