//! Countdown state for the active period

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::time::Instant;

/// State of one running countdown, normal or overtime
#[derive(Debug, Clone)]
pub struct CountdownState {
    /// Cycle ordinal shown to the user
    pub ordinal: u64,
    /// Position in the period sequence
    pub period_index: usize,
    /// Duration being counted against: the period itself or an overtime grant
    pub target: Duration,
    pub is_overtime: bool,
    started_at: Instant,
    started_wall: DateTime<Local>,
}

impl CountdownState {
    /// Start a countdown now
    pub fn start(ordinal: u64, period_index: usize, target: Duration, is_overtime: bool) -> Self {
        Self {
            ordinal,
            period_index,
            target,
            is_overtime,
            started_at: Instant::now(),
            started_wall: Local::now(),
        }
    }

    /// Time since the countdown started, sampled from the clock
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Remaining time for a given elapsed span, `None` once expired
    pub fn remaining_after(&self, elapsed: Duration) -> Option<Duration> {
        self.target
            .checked_sub(elapsed)
            .filter(|remaining| !remaining.is_zero())
    }

    /// Remaining time right now, `None` once expired
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining_after(self.elapsed())
    }

    pub fn started_wall(&self) -> DateTime<Local> {
        self.started_wall
    }

    /// Wall-clock time the countdown is due to expire
    pub fn expected_end(&self) -> Option<DateTime<Local>> {
        chrono::Duration::from_std(self.target)
            .ok()
            .and_then(|target| self.started_wall.checked_add_signed(target))
    }
}
