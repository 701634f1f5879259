//! Duration token parsing
//!
//! Accepts `<n>h`/`<n>hours`, `<n>m`/`<n>min`/`<n>minutes` and
//! `<n>s`/`<n>sec`/`<n>seconds`, optionally prefixed with `label:`.

use std::time::Duration;

use crate::error::ParseError;

use super::{Period, PeriodSequence};

/// Parse a single unit token such as `25min` into a duration
pub fn parse_duration(token: &str) -> Result<Duration, ParseError> {
    let invalid = || ParseError::InvalidDuration {
        token: token.to_string(),
    };

    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    if digits_end == 0 {
        return Err(invalid());
    }

    let (magnitude, unit) = token.split_at(digits_end);
    let seconds_per_unit: u64 = match unit {
        "h" | "hours" => 3600,
        "m" | "min" | "minutes" => 60,
        "s" | "sec" | "seconds" => 1,
        _ => return Err(invalid()),
    };

    let seconds = magnitude
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(seconds_per_unit))
        .ok_or_else(invalid)?;

    if seconds == 0 {
        return Err(ParseError::NonPositive {
            token: token.to_string(),
        });
    }

    Ok(Duration::from_secs(seconds))
}

/// Parse one period token, e.g. `work:25min` or `90s`
pub fn parse_period(token: &str) -> Result<Period, ParseError> {
    let token = token.trim();

    match token.split_once(':') {
        Some((label, rest)) => {
            if !is_valid_label(label) {
                return Err(ParseError::InvalidLabel {
                    label: label.to_string(),
                    token: token.to_string(),
                });
            }
            let duration = parse_duration(rest).map_err(|e| match e {
                // Report the whole token, label included
                ParseError::InvalidDuration { .. } => ParseError::InvalidDuration {
                    token: token.to_string(),
                },
                ParseError::NonPositive { .. } => ParseError::NonPositive {
                    token: token.to_string(),
                },
                other => other,
            })?;
            Ok(Period::labelled(label, duration))
        }
        None => Ok(Period::new(parse_duration(token)?)),
    }
}

/// Parse a comma-separated list of period tokens, preserving order
pub fn parse_sequence(argument: &str) -> Result<PeriodSequence, ParseError> {
    if argument.trim().is_empty() {
        return Err(ParseError::EmptySequence);
    }

    let periods = argument
        .split(',')
        .map(parse_period)
        .collect::<Result<Vec<_>, _>>()?;

    PeriodSequence::new(periods)
}

fn is_valid_label(label: &str) -> bool {
    let mut chars = label.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_');
    starts_ok && label.chars().count() >= 2 && chars.all(|c| c.is_alphanumeric() || c == '_')
}
