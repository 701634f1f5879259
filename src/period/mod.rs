//! Period definitions and the repeating period sequence
//!
//! A period is a positive duration with an optional label. The sequence is
//! the ordered, non-empty list the timer cycles through.

pub mod format;
pub mod parser;

use std::{fmt, str::FromStr, time::Duration};

use crate::error::ParseError;

pub use format::{format_duration, round_to_nearest_second};
pub use parser::{parse_duration, parse_period, parse_sequence};

/// One configured period, e.g. `work:25min`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    label: Option<String>,
    duration: Duration,
}

impl Period {
    /// Create an unlabelled period
    pub fn new(duration: Duration) -> Self {
        Self {
            label: None,
            duration,
        }
    }

    /// Create a labelled period
    pub fn labelled(label: impl Into<String>, duration: Duration) -> Self {
        Self {
            label: Some(label.into()),
            duration,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} ({})", label, format_duration(self.duration)),
            None => f.write_str(&format_duration(self.duration)),
        }
    }
}

impl FromStr for Period {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_period(s)
    }
}

/// Non-empty, ordered list of periods
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSequence {
    periods: Vec<Period>,
}

impl PeriodSequence {
    /// Build a sequence, rejecting an empty list
    pub fn new(periods: Vec<Period>) -> Result<Self, ParseError> {
        if periods.is_empty() {
            return Err(ParseError::EmptySequence);
        }
        Ok(Self { periods })
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Never true for a sequence built through `new`
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Position in the sequence for a given cycle ordinal
    pub fn index_for(&self, ordinal: u64) -> usize {
        (ordinal % self.periods.len() as u64) as usize
    }

    /// Period for a cycle ordinal, wrapping around the sequence
    pub fn get(&self, ordinal: u64) -> &Period {
        &self.periods[self.index_for(ordinal)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Period> {
        self.periods.iter()
    }
}

impl fmt::Display for PeriodSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, period) in self.periods.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", period)?;
        }
        Ok(())
    }
}

impl FromStr for PeriodSequence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sequence(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work_relax() -> PeriodSequence {
        PeriodSequence::new(vec![
            Period::labelled("work", Duration::from_secs(1500)),
            Period::labelled("relax", Duration::from_secs(300)),
        ])
        .unwrap()
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(PeriodSequence::new(Vec::new()), Err(ParseError::EmptySequence));
    }

    #[test]
    fn ordinals_wrap_around_the_sequence() {
        let sequence = work_relax();
        let indices: Vec<_> = (0..6).map(|n| sequence.index_for(n)).collect();
        assert_eq!(indices, vec![0, 1, 0, 1, 0, 1]);
        assert_eq!(sequence.get(4).label(), Some("work"));
        assert_eq!(sequence.get(7).label(), Some("relax"));
    }

    #[test]
    fn single_period_always_selected() {
        let sequence = PeriodSequence::new(vec![Period::new(Duration::from_secs(60))]).unwrap();
        assert!((0..5).all(|n| sequence.index_for(n) == 0));
    }

    #[test]
    fn displays_summary() {
        assert_eq!(work_relax().to_string(), "work (0:25:00), relax (0:05:00)");
        let plain: PeriodSequence = "25min,5min".parse().unwrap();
        assert_eq!(plain.to_string(), "0:25:00, 0:05:00");
    }
}
