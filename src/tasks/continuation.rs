//! Drives one period from countdown to acceptance, including overtime

use std::time::Duration;

use tracing::{debug, info};

use super::countdown::{run_countdown, CountdownContext};
use crate::{
    display::Renderer,
    error::TimerError,
    period::Period,
    services::{overtime_grant, ConfirmPrompt, Decision, PromptRequest},
    state::CyclePhase,
};

/// Summary of a finished cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodOutcome {
    pub ordinal: u64,
    pub period_index: usize,
    /// How many times the user asked for more time
    pub declines: u32,
    /// Total overtime counted down on top of the period
    pub overtime: Duration,
}

/// Count down `period`, then prompt until the user accepts
///
/// Every decline counts down the same grant in overtime mode and asks again.
pub async fn run_period<P, R>(
    ordinal: u64,
    period_index: usize,
    period: &Period,
    min_more_time: Duration,
    prompt: &mut P,
    renderer: &mut R,
) -> Result<PeriodOutcome, TimerError>
where
    P: ConfirmPrompt + ?Sized,
    R: Renderer,
{
    let context = CountdownContext {
        ordinal,
        period_index,
        label: period.label(),
        period_duration: period.duration(),
    };
    let grant = overtime_grant(period.duration(), min_more_time);
    let request = PromptRequest {
        ordinal,
        label: period.label().map(str::to_string),
        period_duration: period.duration(),
        grant,
    };

    let mut outcome = PeriodOutcome {
        ordinal,
        period_index,
        declines: 0,
        overtime: Duration::ZERO,
    };
    let mut phase = CyclePhase::initial(period.duration());

    while !phase.is_terminal() {
        phase = match phase {
            CyclePhase::CountingDown {
                target,
                is_overtime,
            } => {
                run_countdown(&context, target, is_overtime, renderer).await?;
                CyclePhase::Expired
            }
            CyclePhase::Expired => CyclePhase::Prompting,
            CyclePhase::Prompting => match prompt.ask(&request).await? {
                Decision::Accept => CyclePhase::Accepted,
                Decision::Decline => CyclePhase::Declined,
            },
            CyclePhase::Declined => {
                outcome.declines += 1;
                outcome.overtime += grant;
                info!("Period {} declined, granting {}s more", ordinal, grant.as_secs());
                CyclePhase::CountingDown {
                    target: grant,
                    is_overtime: true,
                }
            }
            CyclePhase::Accepted => break,
        };
        debug!("Period {} -> {:?}", ordinal, phase);
    }

    info!(
        "Period {} accepted after {} decline(s)",
        ordinal, outcome.declines
    );
    Ok(outcome)
}
