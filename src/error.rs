//! Error types for period-timer

use thiserror::Error;

/// Accepted token patterns, quoted in every parse failure
pub const ACCEPTED_PATTERNS: &str =
    r"[label:]\d+h(ours)?, [label:]\d+m(in(utes)?)?, [label:]\d+s(ec(onds)?)?";

/// A single duration token or sequence could not be interpreted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unable to interpret '{token}' (use one of {patterns})", patterns = ACCEPTED_PATTERNS)]
    InvalidDuration { token: String },

    #[error("Invalid label '{label}' in '{token}': labels start with a letter or '_' and are at least two characters long")]
    InvalidLabel { label: String, token: String },

    #[error("Duration '{token}' must be greater than zero")]
    NonPositive { token: String },

    #[error("At least one period duration is required (use one of {patterns})", patterns = ACCEPTED_PATTERNS)]
    EmptySequence,
}

/// Top-level error for the timer library
#[derive(Error, Debug)]
pub enum TimerError {
    /// Startup configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] ParseError),

    /// The prompt mechanism is missing or broken
    #[error("Environment error: {0}")]
    Environment(String),

    /// Writing the status line failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
