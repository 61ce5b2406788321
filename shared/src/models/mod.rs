//! Domain models for event weather risk analysis

mod analysis;
mod comparison;
mod event;
mod observation;
mod recommendation;
mod risk;

pub use analysis::*;
pub use comparison::*;
pub use event::*;
pub use observation::*;
pub use recommendation::*;
pub use risk::*;
