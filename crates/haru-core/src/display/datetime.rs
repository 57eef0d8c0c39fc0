//! Date and time display utilities.
//!
//! Wrapper types over the ISO strings stored on a task, formatting them the
//! way the rendered list shows them. Both tolerate empty and malformed
//! input: empty renders as nothing, anything unparseable falls back to the
//! raw string.

use std::fmt;

/// Formats an ISO `YYYY-MM-DD` date as `{month}월 {day}일`.
///
/// Leading zeros are dropped, so `2024-03-05` renders as `3월 5일`. This is
/// a fixed display convention, not internationalized.
pub struct MonthDay<'a>(pub &'a str);

impl fmt::Display for MonthDay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }

        let mut parts = self.0.splitn(3, '-');
        let _year = parts.next();
        let month = parts.next().and_then(|m| m.parse::<u32>().ok());
        let day = parts.next().and_then(|d| d.parse::<u32>().ok());

        match (month, day) {
            (Some(month), Some(day)) => write!(f, "{month}월 {day}일"),
            _ => write!(f, "{}", self.0),
        }
    }
}

/// Formats a 24-hour time, keeping only hours and minutes.
///
/// `09:30` passes through unchanged and `09:30:15` drops the seconds.
pub struct ClockTime<'a>(pub &'a str);

impl fmt::Display for ClockTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }

        let mut parts = self.0.splitn(3, ':');
        match (parts.next(), parts.next()) {
            (Some(hours), Some(minutes)) => write!(f, "{hours}:{minutes}"),
            _ => write!(f, "{}", self.0),
        }
    }
}
