//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::{
    period::{parse_duration, PeriodSequence},
    services::{PromptKind, DEFAULT_DIALOG_PROGRAM},
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "period-timer")]
#[command(about = "Show a timer in the command line and ask before moving on to the next period")]
#[command(version)]
pub struct Config {
    /// Period durations as a comma-separated list; use 'h'/'hours',
    /// 'm'/'min'/'minutes' or 's'/'sec'/'seconds' for the unit and an
    /// optional 'label:' prefix
    #[arg(short = 'd', long, default_value = "work:25min,relax:5min")]
    pub period_durations: PeriodSequence,

    /// Minimal amount of extra time given when a period is not ended
    #[arg(long, default_value = "1min", value_parser = parse_duration)]
    pub min_more_time: Duration,

    /// How to ask whether to continue
    #[arg(long, value_enum, default_value = "dialog")]
    pub prompt: PromptKind,

    /// Dialog program used by the dialog prompt
    #[arg(long, default_value = DEFAULT_DIALOG_PROGRAM)]
    pub dialog_program: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    ///
    /// Quiet by default so log output doesn't break up the status line.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Timer settings fixed for the rest of the process
    pub fn settings(&self) -> TimerSettings {
        TimerSettings {
            sequence: self.period_durations.clone(),
            min_more_time: self.min_more_time,
        }
    }
}

/// Read-only timer configuration handed to the cycle controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSettings {
    pub sequence: PeriodSequence,
    /// Floor for the overtime granted on decline
    pub min_more_time: Duration,
}
