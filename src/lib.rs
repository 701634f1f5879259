//! Period Timer - a command-line interval timer
//!
//! Cycles forever through a sequence of (optionally labelled) periods, shows
//! a live countdown and asks the user before moving on, granting overtime
//! when they aren't ready yet.

pub mod config;
pub mod display;
pub mod error;
pub mod period;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, TimerSettings};
pub use display::{Renderer, TerminalRenderer, Tick};
pub use error::{ParseError, TimerError};
pub use period::{Period, PeriodSequence};
pub use services::{ConfirmPrompt, Decision, PromptRequest};
pub use tasks::CycleController;
pub use utils::signals::shutdown_signal;
