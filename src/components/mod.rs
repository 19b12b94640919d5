//! Preview components for the qupo GUI
//!
//! Stand-in child widgets used when the overview step runs on its own.

mod preview;
mod weight_stepper;

pub use preview::*;
pub use weight_stepper::*;
