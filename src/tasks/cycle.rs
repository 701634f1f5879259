//! Cycle controller: runs the period sequence forever

use std::convert::Infallible;

use tracing::info;

use super::continuation::{run_period, PeriodOutcome};
use crate::{
    config::TimerSettings, display::Renderer, error::TimerError, services::ConfirmPrompt,
    state::CycleCounter,
};

/// Owns the settings and capabilities and advances through the sequence
pub struct CycleController<P, R> {
    settings: TimerSettings,
    counter: CycleCounter,
    prompt: P,
    renderer: R,
}

impl<P, R> CycleController<P, R>
where
    P: ConfirmPrompt,
    R: Renderer,
{
    pub fn new(settings: TimerSettings, prompt: P, renderer: R) -> Self {
        Self {
            settings,
            counter: CycleCounter::new(),
            prompt,
            renderer,
        }
    }

    /// Ordinal of the next cycle to run
    pub fn counter(&self) -> u64 {
        self.counter.value()
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run the current period to acceptance and advance the counter once
    pub async fn run_cycle(&mut self) -> Result<PeriodOutcome, TimerError> {
        let ordinal = self.counter.value();
        let sequence = &self.settings.sequence;
        let period_index = sequence.index_for(ordinal);
        let period = sequence.get(ordinal);

        info!("Starting period {}: {}", ordinal, period);
        let outcome = run_period(
            ordinal,
            period_index,
            period,
            self.settings.min_more_time,
            &mut self.prompt,
            &mut self.renderer,
        )
        .await?;

        self.counter.advance();
        Ok(outcome)
    }

    /// Cycle until an error occurs; there is no normal exit
    pub async fn run_forever(&mut self) -> Result<Infallible, TimerError> {
        info!(
            "Cycling through {} period(s), minimum overtime {}s",
            self.settings.sequence.len(),
            self.settings.min_more_time.as_secs()
        );
        loop {
            self.run_cycle().await?;
        }
    }
}
