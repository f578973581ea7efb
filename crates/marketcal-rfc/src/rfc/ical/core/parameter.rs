//! iCalendar parameter types (RFC 5545 §3.2).

/// A single iCalendar property parameter.
///
/// For example: `DTSTART;VALUE=DATE:20260101` carries a parameter with
/// name `VALUE` and value `DATE`. Encoding on the wire is the serializer's
/// job (`build::escape_param_value`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values. Most parameters have exactly one.
    pub values: Vec<String>,
}

impl Parameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Returns the first (and usually only) value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Creates a VALUE parameter.
    #[must_use]
    pub fn value_type(value_type: impl Into<String>) -> Self {
        Self::new("VALUE", value_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_name_normalized() {
        let param = Parameter::new("value", "DATE");
        assert_eq!(param.name, "VALUE");
        assert_eq!(param.value(), Some("DATE"));
        assert_eq!(param, Parameter::value_type("DATE"));
    }
}
