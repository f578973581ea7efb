//! iCalendar DATE-TIME value type (RFC 5545 §3.3.5).

use std::fmt;

use chrono::{Datelike, Timelike, Utc};

/// UTC DATE-TIME value (RFC 5545 §3.3.5, form #2).
///
/// Only `DTSTAMP` carries a date-time here, and RFC 5545 requires it in UTC,
/// so floating and zoned forms are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    /// Year (e.g., 2026).
    pub year: i32,
    /// Month (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
    /// Hour (0-23).
    pub hour: u32,
    /// Minute (0-59).
    pub minute: u32,
    /// Second (0-60, allowing for leap seconds).
    pub second: u32,
}

impl DateTime {
    /// Creates a UTC DATE-TIME.
    #[must_use]
    pub const fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(dt: chrono::DateTime<Utc>) -> Self {
        Self::utc(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
        )
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}T{:02}{:02}{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn datetime_display() {
        let dt = DateTime::utc(2026, 1, 23, 12, 0, 0);
        assert_eq!(dt.to_string(), "20260123T120000Z");
    }

    #[test]
    fn datetime_from_chrono_utc() {
        let chrono_dt = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 58).unwrap();
        assert_eq!(DateTime::from(chrono_dt).to_string(), "20251231T235958Z");
    }
}
