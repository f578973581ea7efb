//! iCalendar serializer (RFC 5545).
//!
//! Serializes iCalendar structures to compliant text format.

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::{Component, ComponentKind, ICalendar, Parameter, Property, Value};

/// Serializes an iCalendar document to a string.
///
/// ## Errors
/// Returns an error if the calendar is missing a required property or a
/// TEXT value contains a control character that cannot be represented.
pub fn serialize(ical: &ICalendar) -> RfcResult<String> {
    ical.validate()?;
    let out = serialize_component(&ical.root)?;
    tracing::debug!(
        events = ical.events().len(),
        bytes = out.len(),
        "Serialized iCalendar document"
    );
    Ok(out)
}

/// Serializes a component to a string.
///
/// Child components are written in insertion order; event order is the
/// caller's responsibility.
///
/// ## Errors
/// Returns an error if any property value cannot be serialized.
pub fn serialize_component(component: &Component) -> RfcResult<String> {
    let mut result = fold_line(&format!("BEGIN:{}", component.name()));

    for prop in canonical_property_order(&component.properties, component.kind) {
        result.push_str(&serialize_property(prop)?);
    }

    for child in &component.children {
        result.push_str(&serialize_component(child)?);
    }

    result.push_str(&fold_line(&format!("END:{}", component.name())));
    Ok(result)
}

/// Serializes a property to a folded content line.
///
/// ## Errors
/// Returns an error if a TEXT value contains a control character other
/// than newline or tab.
pub fn serialize_property(prop: &Property) -> RfcResult<String> {
    let mut line = prop.name.clone();

    for param in &prop.params {
        line.push(';');
        line.push_str(&serialize_parameter(param));
    }

    line.push(':');
    line.push_str(&serialize_value(prop)?);

    Ok(fold_line(&line))
}

fn serialize_parameter(param: &Parameter) -> String {
    let values: Vec<String> = param.values.iter().map(|v| escape_param_value(v)).collect();
    format!("{}={}", param.name, values.join(","))
}

fn serialize_value(prop: &Property) -> RfcResult<String> {
    match &prop.value {
        Value::Text(s) => {
            if let Some(c) = s
                .chars()
                .find(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
            {
                return Err(RfcError::ValidationError(format!(
                    "{} contains control character U+{:04X}",
                    prop.name,
                    u32::from(c)
                )));
            }
            Ok(escape_text(s))
        }
        _ => Ok(prop.raw_value.clone()),
    }
}

/// Returns properties in canonical order for deterministic output.
fn canonical_property_order(props: &[Property], kind: ComponentKind) -> Vec<&Property> {
    let order: &[&str] = match kind {
        ComponentKind::Calendar => &["VERSION", "PRODID", "CALSCALE", "METHOD", "X-WR-CALNAME"],
        ComponentKind::Event => &[
            "UID",
            "DTSTAMP",
            "DTSTART",
            "DURATION",
            "SUMMARY",
            "DESCRIPTION",
            "STATUS",
            "TRANSP",
        ],
    };

    let mut ordered: Vec<&Property> = Vec::with_capacity(props.len());

    for &name in order {
        ordered.extend(props.iter().filter(|p| p.name.eq_ignore_ascii_case(name)));
    }

    // Remaining properties (including X-properties) keep insertion order
    ordered.extend(
        props
            .iter()
            .filter(|p| !order.iter().any(|n| p.name.eq_ignore_ascii_case(n))),
    );

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::core::{Date, DateTime, Duration, names};

    fn event(uid: &str, summary: &str) -> Component {
        let mut event = Component::event();
        event.add_property(Property::text(names::SUMMARY, summary));
        event.add_property(Property::date(names::DTSTART, Date::new(2024, 1, 1)));
        event.add_property(Property::text(names::UID, uid));
        event.add_property(Property::datetime(
            names::DTSTAMP,
            DateTime::utc(2024, 1, 1, 0, 0, 0),
        ));
        event.add_property(Property::duration(names::DURATION, Duration::days(1)));
        event
    }

    #[test_log::test]
    fn serialize_simple_vevent() {
        let mut ical = ICalendar::new("-//Test//Test//EN");
        ical.set_method("PUBLISH");
        ical.add_event(event("test-uid-123", "New Year's Day"));

        let output = serialize(&ical).unwrap();

        assert!(output.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
        assert!(output.ends_with("END:VEVENT\r\nEND:VCALENDAR\r\n"));
        assert!(output.contains("METHOD:PUBLISH\r\n"));
        assert!(output.contains("UID:test-uid-123\r\n"));
        assert!(output.contains("DTSTART;VALUE=DATE:20240101\r\n"));
        assert!(output.contains("DURATION:P1D\r\n"));
        assert!(output.contains("SUMMARY:New Year's Day\r\n"));
    }

    #[test]
    fn serialize_escapes_text() {
        let mut event = Component::event();
        event.add_property(Property::text("SUMMARY", "Closed, all day"));
        event.add_property(Property::text("DESCRIPTION", "Line 1\nLine 2"));

        let output = serialize_component(&event).unwrap();

        assert!(output.contains("SUMMARY:Closed\\, all day\r\n"));
        assert!(output.contains("DESCRIPTION:Line 1\\nLine 2\r\n"));
    }

    #[test]
    fn serialize_folds_long_lines() {
        let mut event = Component::event();
        let long_summary = "A".repeat(100);
        event.add_property(Property::text("SUMMARY", &long_summary));

        let output = serialize_component(&event).unwrap();

        assert!(output.contains("\r\n "));
        let unfolded = output.replace("\r\n ", "");
        assert!(unfolded.contains(&format!("SUMMARY:{long_summary}\r\n")));
    }

    #[test]
    fn canonical_order_applied() {
        let output = serialize_component(&event("uid", "Summary")).unwrap();

        let uid_pos = output.find("UID:").unwrap();
        let stamp_pos = output.find("DTSTAMP:").unwrap();
        let start_pos = output.find("DTSTART;").unwrap();
        let summary_pos = output.find("SUMMARY:").unwrap();
        assert!(uid_pos < stamp_pos);
        assert!(stamp_pos < start_pos);
        assert!(start_pos < summary_pos);
    }

    #[test]
    fn unknown_properties_follow_in_insertion_order() {
        let mut event = Component::event();
        event.add_property(Property::text("X-SECOND", "2"));
        event.add_property(Property::text("X-FIRST", "1"));
        event.add_property(Property::text("UID", "uid"));

        let output = serialize_component(&event).unwrap();
        let second = output.find("X-SECOND").unwrap();
        let first = output.find("X-FIRST").unwrap();
        assert!(output.find("UID:").unwrap() < second);
        assert!(second < first);
    }

    #[test]
    fn events_are_not_reordered() {
        let mut ical = ICalendar::default();
        ical.add_event(event("zzz", "First"));
        ical.add_event(event("aaa", "Second"));

        let output = serialize(&ical).unwrap();
        assert!(output.find("UID:zzz").unwrap() < output.find("UID:aaa").unwrap());
    }

    #[test]
    fn bare_carriage_return_becomes_line_break() {
        let mut event = Component::event();
        event.add_property(Property::text("DESCRIPTION", "a\rb"));

        let output = serialize_component(&event).unwrap();
        assert!(output.contains("DESCRIPTION:a\\nb\r\n"));
    }

    #[test]
    fn control_characters_are_rejected() {
        let mut event = Component::event();
        event.add_property(Property::text("SUMMARY", "bell\u{7}"));

        assert!(matches!(
            serialize_component(&event),
            Err(RfcError::ValidationError(_))
        ));
    }

    #[test]
    fn invalid_calendar_is_not_serialized() {
        let mut ical = ICalendar::default();
        ical.add_event(Component::event());

        assert!(matches!(
            serialize(&ical),
            Err(RfcError::MissingProperty { property: "UID", .. })
        ));
    }
}
