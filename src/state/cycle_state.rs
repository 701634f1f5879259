//! Cycle counter and per-cycle phases

use std::time::Duration;

/// Ever-increasing count of accepted periods, never reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleCounter(u64);

impl CycleCounter {
    pub fn new() -> Self {
        Self(0)
    }

    /// Current ordinal
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Move to the next cycle and return the new ordinal
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

/// Phase of a single cycle
///
/// ```text
/// CountingDown -> Expired -> Prompting -> Accepted
///                                      -> Declined -> CountingDown (overtime)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    CountingDown { target: Duration, is_overtime: bool },
    Expired,
    Prompting,
    Declined,
    Accepted,
}

impl CyclePhase {
    /// Entry phase for a fresh period
    pub fn initial(duration: Duration) -> Self {
        CyclePhase::CountingDown {
            target: duration,
            is_overtime: false,
        }
    }

    /// Whether the cycle is finished
    pub fn is_terminal(&self) -> bool {
        matches!(self, CyclePhase::Accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_only_grows() {
        let mut counter = CycleCounter::new();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.advance(), 1);
        assert_eq!(counter.advance(), 2);
        assert_eq!(counter.value(), 2);
    }

    #[test]
    fn initial_phase_is_normal_countdown() {
        let phase = CyclePhase::initial(Duration::from_secs(60));
        assert_eq!(
            phase,
            CyclePhase::CountingDown {
                target: Duration::from_secs(60),
                is_overtime: false
            }
        );
        assert!(!phase.is_terminal());
        assert!(CyclePhase::Accepted.is_terminal());
    }
}
