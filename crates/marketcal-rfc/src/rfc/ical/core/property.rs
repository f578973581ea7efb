//! iCalendar property type (RFC 5545 §3.1, §3.8).

use super::{Date, DateTime, Duration, Parameter, Value};

/// An iCalendar property.
///
/// Holds the typed value together with its serialized form so the
/// serializer never has to re-derive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of insertion.
    pub params: Vec<Parameter>,
    /// Typed value.
    pub value: Value,
    /// Serialized value string (unescaped for TEXT).
    pub raw_value: String,
}

impl Property {
    fn build(name: impl Into<String>, params: Vec<Parameter>, value: Value, raw: String) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params,
            value,
            raw_value: raw,
        }
    }

    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value_str = value.into();
        Self::build(name, Vec::new(), Value::Text(value_str.clone()), value_str)
    }

    /// Creates a property with a date-time value.
    #[must_use]
    pub fn datetime(name: impl Into<String>, dt: DateTime) -> Self {
        let raw = dt.to_string();
        Self::build(name, Vec::new(), Value::DateTime(dt), raw)
    }

    /// Creates a property with a date value (`VALUE=DATE`).
    #[must_use]
    pub fn date(name: impl Into<String>, d: Date) -> Self {
        let raw = d.to_string();
        Self::build(name, vec![Parameter::value_type("DATE")], Value::Date(d), raw)
    }

    /// Creates a property with a duration value.
    #[must_use]
    pub fn duration(name: impl Into<String>, d: Duration) -> Self {
        let raw = d.to_string();
        Self::build(name, Vec::new(), Value::Duration(d), raw)
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Returns the value as a date-time if it is a date-time value.
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime> {
        self.value.as_datetime()
    }

    /// Returns the value as a date if it is a date value.
    #[must_use]
    pub fn as_date(&self) -> Option<&Date> {
        self.value.as_date()
    }

    /// Returns the value as a duration if it is a duration value.
    #[must_use]
    pub fn as_duration(&self) -> Option<&Duration> {
        self.value.as_duration()
    }
}

/// Property names emitted by this crate.
pub mod names {
    // Calendar properties
    pub const CALSCALE: &str = "CALSCALE";
    pub const METHOD: &str = "METHOD";
    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";
    pub const X_WR_CALNAME: &str = "X-WR-CALNAME";

    // Descriptive
    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const STATUS: &str = "STATUS";
    pub const SUMMARY: &str = "SUMMARY";

    // Date and time
    pub const DTSTART: &str = "DTSTART";
    pub const DURATION: &str = "DURATION";
    pub const TRANSP: &str = "TRANSP";

    // Relationship
    pub const UID: &str = "UID";

    // Change management
    pub const DTSTAMP: &str = "DTSTAMP";

    // Outlook free/busy hint
    pub const X_MICROSOFT_CDO_BUSYSTATUS: &str = "X-MICROSOFT-CDO-BUSYSTATUS";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_text() {
        let prop = Property::text("summary", "Good Friday");
        assert_eq!(prop.name, "SUMMARY");
        assert_eq!(prop.as_text(), Some("Good Friday"));
        assert!(prop.params.is_empty());
    }

    #[test]
    fn property_date_carries_value_param() {
        let prop = Property::date(names::DTSTART, Date::new(2024, 3, 29));
        assert_eq!(prop.get_param_value("value"), Some("DATE"));
        assert_eq!(prop.raw_value, "20240329");
        assert_eq!(prop.as_date(), Some(&Date::new(2024, 3, 29)));
    }

    #[test]
    fn property_duration() {
        let prop = Property::duration(names::DURATION, Duration::days(1));
        assert_eq!(prop.raw_value, "P1D");
        assert_eq!(prop.as_duration(), Some(&Duration::days(1)));
    }
}
