//! Timer tasks module
//!
//! The countdown engine, the per-period continuation loop and the cycle
//! controller that ties them together.

pub mod continuation;
pub mod countdown;
pub mod cycle;

// Re-export main types and functions
pub use continuation::{run_period, PeriodOutcome};
pub use countdown::{run_countdown, CountdownContext, TICK_INTERVAL};
pub use cycle::CycleController;
