//! Conversion between elapsed milliseconds and `MM:SS.CC` display labels.
//!
//! Labels are the only form in which a committed time is stored on the
//! leaderboard, so `parse_time_label` must undo `format_elapsed` exactly for
//! every value the stopwatch can produce (10 ms resolution, under one hour).

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static TIME_LABEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2}):(\d{2})\.(\d{2})$").unwrap());

/// Reasons a string is not a valid `MM:SS.CC` label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeLabelError {
    #[error("Time label cannot be empty")]
    Empty,
    #[error("Invalid time label '{0}', expected MM:SS.CC")]
    InvalidFormat(String),
    #[error("Invalid seconds: {0} (must be 0-59)")]
    InvalidSeconds(u32),
    #[error("Invalid minutes: {0} (must be 0-59)")]
    InvalidMinutes(u32),
}

/// Format milliseconds as `MM:SS.CC` (minutes, seconds, centiseconds).
///
/// Every component is truncated, and minutes wrap at 60 like the seconds do.
pub fn format_elapsed(ms: u32) -> String {
    let centis = (ms % 1000) / 10;
    let seconds = (ms / 1000) % 60;
    let minutes = (ms / 60_000) % 60;
    format!("{:02}:{:02}.{:02}", minutes, seconds, centis)
}

/// Parse a `MM:SS.CC` label back into milliseconds.
///
/// # Examples
/// ```
/// use race_timer::time_label::parse_time_label;
/// assert_eq!(parse_time_label("00:00.95"), Ok(950));
/// assert_eq!(parse_time_label("01:02.03"), Ok(62_030));
/// ```
pub fn parse_time_label(label: &str) -> Result<u32, TimeLabelError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(TimeLabelError::Empty);
    }

    let captures = TIME_LABEL_REGEX
        .captures(trimmed)
        .ok_or_else(|| TimeLabelError::InvalidFormat(trimmed.to_string()))?;

    // Two ASCII digits each, so these cannot fail.
    let minutes: u32 = captures[1]
        .parse()
        .map_err(|_| TimeLabelError::InvalidFormat(trimmed.to_string()))?;
    let seconds: u32 = captures[2]
        .parse()
        .map_err(|_| TimeLabelError::InvalidFormat(trimmed.to_string()))?;
    let centis: u32 = captures[3]
        .parse()
        .map_err(|_| TimeLabelError::InvalidFormat(trimmed.to_string()))?;

    if minutes > 59 {
        return Err(TimeLabelError::InvalidMinutes(minutes));
    }
    if seconds > 59 {
        return Err(TimeLabelError::InvalidSeconds(seconds));
    }

    Ok(minutes * 60_000 + seconds * 1_000 + centis * 10)
}
