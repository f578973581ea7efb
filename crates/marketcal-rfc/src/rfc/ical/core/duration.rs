//! iCalendar DURATION value type (RFC 5545 §3.3.6).

use std::fmt;

/// Day-based DURATION value (`dur-day` in RFC 5545 §3.3.6).
///
/// All-day events only ever span whole days, so the week and time forms
/// are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Duration {
    /// Number of days.
    pub days: u32,
}

impl Duration {
    /// Creates a duration from days.
    #[must_use]
    pub const fn days(days: u32) -> Self {
        Self { days }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}D", self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_display_one_day() {
        assert_eq!(Duration::days(1).to_string(), "P1D");
    }

    #[test]
    fn duration_display_zero() {
        assert_eq!(Duration::default().to_string(), "P0D");
    }
}
