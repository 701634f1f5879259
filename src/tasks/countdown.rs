//! Countdown engine: one tick per second until the target has elapsed

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info};

use crate::{
    display::{Renderer, Tick},
    error::TimerError,
    state::CountdownState,
};

/// Delay between progress updates
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Which period a countdown belongs to
#[derive(Debug, Clone, Copy)]
pub struct CountdownContext<'a> {
    pub ordinal: u64,
    pub period_index: usize,
    pub label: Option<&'a str>,
    /// Configured duration of the period, shown even during overtime
    pub period_duration: Duration,
}

/// Count down `target`, rendering each tick, and return once it has elapsed
pub async fn run_countdown<R: Renderer>(
    context: &CountdownContext<'_>,
    target: Duration,
    is_overtime: bool,
    renderer: &mut R,
) -> Result<CountdownState, TimerError> {
    let state = CountdownState::start(context.ordinal, context.period_index, target, is_overtime);
    info!(
        "Period {} (slot {}) {}countdown of {}s started at {}, due {}",
        state.ordinal,
        state.period_index,
        if is_overtime { "overtime " } else { "" },
        target.as_secs(),
        state.started_wall().format("%H:%M:%S"),
        state
            .expected_end()
            .map(|end| end.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "never".to_string())
    );

    renderer.begin()?;

    let mut ticks = 0u64;
    // Remaining is recomputed from the clock each pass so late wake-ups don't drift
    while let Some(remaining) = state.remaining() {
        renderer.render_tick(&Tick {
            ordinal: context.ordinal,
            label: context.label,
            remaining,
            period_duration: context.period_duration,
            is_overtime,
        })?;
        ticks += 1;
        sleep(TICK_INTERVAL).await;
    }

    debug!("Period {} countdown expired after {} ticks", state.ordinal, ticks);
    Ok(state)
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;
    use crate::display::TerminalRenderer;

    /// Records remaining time and reports every tick on a channel
    struct ReportingRenderer {
        remaining: Vec<Duration>,
        ticks: mpsc::UnboundedSender<()>,
    }

    impl Renderer for ReportingRenderer {
        fn begin(&mut self) -> std::io::Result<()> {
            Ok(())
        }

        fn render_tick(&mut self, tick: &Tick<'_>) -> std::io::Result<()> {
            self.remaining.push(tick.remaining);
            let _ = self.ticks.send(());
            Ok(())
        }
    }

    fn context() -> CountdownContext<'static> {
        CountdownContext {
            ordinal: 0,
            period_index: 0,
            label: Some("work"),
            period_duration: Duration::from_secs(3),
        }
    }

    fn lines(renderer: &TerminalRenderer<Vec<u8>>) -> Vec<String> {
        String::from_utf8(renderer.get_ref().clone())
            .unwrap()
            .trim_start_matches("\x1b[K")
            .split('\r')
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn renders_one_tick_per_second_until_expiry() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let start = tokio::time::Instant::now();

        run_countdown(&context(), Duration::from_secs(3), false, &mut renderer)
            .await
            .unwrap();

        assert_eq!(start.elapsed(), Duration::from_secs(3));
        assert_eq!(
            lines(&renderer),
            vec![
                "period   0 work: 0:00:03 of 0:00:03",
                "period   0 work: 0:00:02 of 0:00:03",
                "period   0 work: 0:00:01 of 0:00:03",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn overtime_countdown_uses_overtime_line() {
        let mut renderer = TerminalRenderer::new(Vec::new());

        let state = run_countdown(&context(), Duration::from_secs(2), true, &mut renderer)
            .await
            .unwrap();

        assert!(state.is_overtime);
        assert_eq!((state.ordinal, state.period_index), (0, 0));
        assert_eq!(state.target, Duration::from_secs(2));
        assert_eq!(
            lines(&renderer),
            vec![
                "period   0 work: 0:00:03 + 0:00:02 overtime of 0:00:03",
                "period   0 work: 0:00:03 + 0:00:01 overtime of 0:00:03",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn late_wake_ups_skip_displayed_seconds() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        // Each one-second sleep wakes up 600ms late
        let jitter = tokio::spawn(async move {
            while rx.recv().await.is_some() {
                tokio::time::advance(Duration::from_millis(1600)).await;
            }
        });
        let mut renderer = ReportingRenderer {
            remaining: Vec::new(),
            ticks: tx,
        };
        let start = tokio::time::Instant::now();

        let state = run_countdown(&context(), Duration::from_secs(5), false, &mut renderer)
            .await
            .unwrap();

        assert_eq!(
            renderer.remaining,
            vec![
                Duration::from_millis(5000),
                Duration::from_millis(3400),
                Duration::from_millis(1800),
                Duration::from_millis(200),
            ]
        );
        let shown: Vec<_> = renderer
            .remaining
            .iter()
            .map(|r| crate::period::round_to_nearest_second(*r).as_secs())
            .collect();
        assert_eq!(shown, vec![5, 3, 2, 0]);
        assert!(renderer.remaining.len() < 5);
        assert_eq!(start.elapsed(), Duration::from_millis(6400));
        assert_eq!(state.remaining(), None);

        drop(renderer);
        jitter.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn sub_second_target_renders_once() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let start = tokio::time::Instant::now();

        run_countdown(&context(), Duration::from_millis(400), false, &mut renderer)
            .await
            .unwrap();

        assert_eq!(lines(&renderer), vec!["period   0 work: 0:00:00 of 0:00:03"]);
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }
}
