//! Human-readable duration rendering

use std::time::Duration;

const SECONDS_PER_DAY: u64 = 86_400;

/// Round to the nearest whole second, halves rounding up
pub fn round_to_nearest_second(duration: Duration) -> Duration {
    let nanos = duration.as_nanos() + 500_000_000;
    Duration::from_secs((nanos / 1_000_000_000) as u64)
}

/// Format as `H:MM:SS`, prefixed with `N day(s), ` past 24 hours
///
/// Sub-second parts are dropped; round first if that matters.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let days = total / SECONDS_PER_DAY;
    let rest = total % SECONDS_PER_DAY;

    let clock = format!("{}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}
