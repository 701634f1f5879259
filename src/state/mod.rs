//! State management module
//!
//! Countdown state for the active period and the cycle-level counter/phase.

pub mod countdown_state;
pub mod cycle_state;

// Re-export main types
pub use countdown_state::CountdownState;
pub use cycle_state::{CycleCounter, CyclePhase};
