//! Status line presentation

use std::{
    io::{self, Write},
    time::Duration,
};

use crossterm::{
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use crate::period::{format_duration, round_to_nearest_second};

/// One progress update of a running countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick<'a> {
    pub ordinal: u64,
    pub label: Option<&'a str>,
    /// Unrounded time left on the current target
    pub remaining: Duration,
    /// Configured duration of the period, not the overtime grant
    pub period_duration: Duration,
    pub is_overtime: bool,
}

/// Anything that can show countdown progress
pub trait Renderer {
    /// Called once before the first tick of a countdown
    fn begin(&mut self) -> io::Result<()>;

    fn render_tick(&mut self, tick: &Tick<'_>) -> io::Result<()>;
}

/// Build the status text for a tick
pub fn status_line(tick: &Tick<'_>) -> String {
    let label = tick.label.map(|l| format!(" {}", l)).unwrap_or_default();
    let remaining = format_duration(round_to_nearest_second(tick.remaining));
    let duration = format_duration(tick.period_duration);

    if tick.is_overtime {
        format!(
            "period {:>3}{}: {} + {} overtime of {}",
            tick.ordinal, label, duration, remaining, duration
        )
    } else {
        format!("period {:>3}{}: {} of {}", tick.ordinal, label, remaining, duration)
    }
}

/// Renders the status line in place using a carriage return
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn begin(&mut self) -> io::Result<()> {
        self.out.queue(Clear(ClearType::UntilNewLine))?;
        self.out.flush()
    }

    fn render_tick(&mut self, tick: &Tick<'_>) -> io::Result<()> {
        write!(self.out, "{}\r", status_line(tick))?;
        self.out.flush()
    }
}
