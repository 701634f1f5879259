//! Continuation prompt capability and overtime grant policy

use std::time::Duration;

use async_trait::async_trait;

use crate::{
    error::TimerError,
    period::{format_duration, round_to_nearest_second},
};

/// Title shown on every prompt
pub const PROMPT_TITLE: &str = "Timer elapsed";

/// Default floor for an overtime grant
pub const DEFAULT_MIN_MORE_TIME: Duration = Duration::from_secs(60);

/// User answer to an expired period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Move on to the next period
    Accept,
    /// Stay on this period for an overtime grant
    Decline,
}

/// What the user is asked after a countdown expires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub ordinal: u64,
    pub label: Option<String>,
    /// Configured duration of the period that elapsed
    pub period_duration: Duration,
    /// Overtime granted if the user declines
    pub grant: Duration,
}

impl PromptRequest {
    pub fn message(&self) -> String {
        let label = self
            .label
            .as_deref()
            .map(|l| format!(" ({})", l))
            .unwrap_or_default();
        format!(
            "Timer {}{} elapsed after {}. Continue to the next timer? If not, we'll give you {} more time.",
            self.ordinal,
            label,
            format_duration(self.period_duration),
            format_duration(self.grant)
        )
    }
}

/// Overtime granted on decline: a tenth of the period, never below `minimum`
pub fn overtime_grant(period_duration: Duration, minimum: Duration) -> Duration {
    minimum.max(round_to_nearest_second(period_duration / 10))
}

/// Blocking yes/no decision point shown when a countdown expires
#[async_trait]
pub trait ConfirmPrompt: Send {
    /// Verify the prompt mechanism can be used at all
    async fn check_available(&mut self) -> Result<(), TimerError> {
        Ok(())
    }

    /// Ask the user and wait for an answer
    async fn ask(&mut self, request: &PromptRequest) -> Result<Decision, TimerError>;
}

#[async_trait]
impl<P: ConfirmPrompt + ?Sized> ConfirmPrompt for Box<P> {
    async fn check_available(&mut self) -> Result<(), TimerError> {
        (**self).check_available().await
    }

    async fn ask(&mut self, request: &PromptRequest) -> Result<Decision, TimerError> {
        (**self).ask(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_uses_floor_for_short_periods() {
        assert_eq!(
            overtime_grant(Duration::from_secs(300), Duration::from_secs(60)),
            Duration::from_secs(60)
        );
    }

    #[test]
    fn grant_is_a_tenth_for_long_periods() {
        assert_eq!(
            overtime_grant(Duration::from_secs(3600), Duration::from_secs(60)),
            Duration::from_secs(360)
        );
        assert_eq!(
            overtime_grant(Duration::from_secs(1500), Duration::from_secs(60)),
            Duration::from_secs(150)
        );
    }

    #[test]
    fn grant_rounds_to_whole_seconds() {
        // 1005s / 10 = 100.5s
        assert_eq!(
            overtime_grant(Duration::from_secs(1005), Duration::from_secs(1)),
            Duration::from_secs(101)
        );
        // 1004s / 10 = 100.4s
        assert_eq!(
            overtime_grant(Duration::from_secs(1004), Duration::from_secs(1)),
            Duration::from_secs(100)
        );
    }

    #[test]
    fn message_names_ordinal_duration_and_grant() {
        let request = PromptRequest {
            ordinal: 2,
            label: Some("work".to_string()),
            period_duration: Duration::from_secs(1500),
            grant: Duration::from_secs(150),
        };
        assert_eq!(
            request.message(),
            "Timer 2 (work) elapsed after 0:25:00. Continue to the next timer? If not, we'll give you 0:02:30 more time."
        );
    }
}
