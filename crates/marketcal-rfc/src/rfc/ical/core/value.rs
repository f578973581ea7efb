//! iCalendar DATE value and the property value enum (RFC 5545 §3.3).

use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::{DateTime, Duration};

/// DATE value (RFC 5545 §3.3.4).
///
/// A calendar date without time component. All-day events use this form
/// for `DTSTART`, so no timezone is ever attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    /// Year (e.g., 2026).
    pub year: i32,
    /// Month (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
}

impl Date {
    /// Creates a new date.
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// Value types (RFC 5545 §3.3).
///
/// The serialized form is kept separately on the owning [`super::Property`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// DATE value.
    Date(Date),
    /// DATE-TIME value.
    DateTime(DateTime),
    /// DURATION value.
    Duration(Duration),
    /// TEXT value (unescaped).
    Text(String),
}

impl Value {
    /// Returns this value as text, if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns this value as a date-time, if it is a date-time value.
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Returns this value as a date, if it is a date value.
    #[must_use]
    pub fn as_date(&self) -> Option<&Date> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Returns this value as a duration, if it is a duration value.
    #[must_use]
    pub fn as_duration(&self) -> Option<&Duration> {
        match self {
            Self::Duration(d) => Some(d),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_display() {
        assert_eq!(Date::new(2026, 1, 23).to_string(), "20260123");
    }

    #[test]
    fn date_from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2024, 11, 28).unwrap();
        assert_eq!(Date::from(naive), Date::new(2024, 11, 28));
        assert_eq!(Date::from(naive).to_string(), "20241128");
    }

    #[test]
    fn value_accessors() {
        let value = Value::Date(Date::new(2025, 4, 18));
        assert_eq!(value.as_date(), Some(&Date::new(2025, 4, 18)));
        assert!(value.as_text().is_none());
        assert_eq!(Value::Text("x".into()).as_text(), Some("x"));
    }
}
