use chrono::{DateTime, Utc};
use uuid::Uuid;

use marketcal_core::config::CalendarConfig;
use marketcal_core::constants::EVENT_UID_NAMESPACE;
use marketcal_rfc::error::{RfcError, RfcResult};
use marketcal_rfc::rfc::ical::core::{Component, Duration, ICalendar, Property, names};

use crate::holiday::CalendarEvent;

/// The only iTIP method this calendar is published with.
pub const PUBLISH_METHOD: &str = "PUBLISH";

/// Calendar-level metadata written ahead of the events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarHeader {
    /// Written as `PRODID`.
    pub product_id: String,
    /// Written as `X-WR-CALNAME`.
    pub calendar_name: String,
    /// Used as every event's `DTSTAMP`.
    pub stamp: DateTime<Utc>,
}

impl CalendarHeader {
    #[must_use]
    pub fn new(
        product_id: impl Into<String>,
        calendar_name: impl Into<String>,
        stamp: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            calendar_name: calendar_name.into(),
            stamp,
        }
    }

    /// Header built from configured names, stamped at `stamp`.
    #[must_use]
    pub fn from_config(config: &CalendarConfig, stamp: DateTime<Utc>) -> Self {
        Self::new(&config.product_id, &config.calendar_name, stamp)
    }
}

/// ## Summary
/// Returns a stable UID for an event, derived from its title and start date.
///
/// Regenerating the calendar yields the same UIDs, so subscribers update
/// events in place instead of duplicating them.
#[must_use]
pub fn event_uid(event: &CalendarEvent) -> String {
    let namespace = Uuid::new_v5(&Uuid::NAMESPACE_DNS, EVENT_UID_NAMESPACE.as_bytes());
    let key = format!("{}/{}", event.start, event.title);
    Uuid::new_v5(&namespace, key.as_bytes()).to_string()
}

fn to_component(event: &CalendarEvent, header: &CalendarHeader) -> RfcResult<Component> {
    if event.title.trim().is_empty() {
        return Err(RfcError::ValidationError(format!(
            "event on {} has an empty title",
            event.start
        )));
    }

    let mut component = Component::event();
    component.add_property(Property::text(names::UID, event_uid(event)));
    component.add_property(Property::datetime(names::DTSTAMP, header.stamp.into()));
    component.add_property(Property::date(names::DTSTART, event.start.into()));
    component.add_property(Property::duration(
        names::DURATION,
        Duration::days(event.duration_days),
    ));
    component.add_property(Property::text(names::SUMMARY, &event.title));
    component.add_property(Property::text(names::DESCRIPTION, &event.description));
    component.add_property(Property::text(names::STATUS, event.status.as_str()));
    // All-day closures never block time.
    component.add_property(Property::text(names::TRANSP, "TRANSPARENT"));
    component.add_property(Property::text(
        names::X_MICROSOFT_CDO_BUSYSTATUS,
        event.busy_status.as_str(),
    ));
    Ok(component)
}

/// ## Summary
/// Builds the VCALENDAR for `events`, one VEVENT per event in input order.
///
/// ## Errors
/// Returns `ValidationError` if the header's product id or calendar name
/// is blank, or an event has a blank title.
pub fn to_icalendar(events: &[CalendarEvent], header: &CalendarHeader) -> RfcResult<ICalendar> {
    if header.product_id.trim().is_empty() {
        return Err(RfcError::ValidationError("product id is empty".to_owned()));
    }
    if header.calendar_name.trim().is_empty() {
        return Err(RfcError::ValidationError(
            "calendar name is empty".to_owned(),
        ));
    }

    let mut ical = ICalendar::new(&header.product_id);
    ical.set_method(PUBLISH_METHOD);
    ical.set_name(&header.calendar_name);
    for event in events {
        ical.add_event(to_component(event, header)?);
    }
    Ok(ical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::{build_year, project};
    use chrono::TimeZone;
    use marketcal_rfc::rfc::ical::core::Date;

    fn header() -> CalendarHeader {
        CalendarHeader::new(
            "US Market Holidays Calendar",
            "US Market Holidays",
            Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        )
    }

    #[test]
    fn calendar_header_properties() {
        let ical = to_icalendar(&[], &header()).unwrap();
        assert_eq!(ical.prodid(), Some("US Market Holidays Calendar"));
        assert_eq!(ical.method(), Some("PUBLISH"));
        assert_eq!(ical.name(), Some("US Market Holidays"));
        assert!(ical.events().is_empty());
    }

    #[test]
    fn one_vevent_per_event_in_order() {
        let events = project(&build_year(2024).unwrap());
        let ical = to_icalendar(&events, &header()).unwrap();

        let summaries: Vec<_> = ical.events().iter().filter_map(|e| e.summary()).collect();
        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(summaries, titles);

        let first = ical.events()[0];
        assert_eq!(
            first
                .get_property(names::DTSTART)
                .and_then(Property::as_date),
            Some(&Date::new(2024, 1, 1))
        );
        assert_eq!(
            first
                .get_property(names::DTSTAMP)
                .map(|p| p.raw_value.as_str()),
            Some("20260102T030405Z")
        );
        assert_eq!(
            first
                .get_property(names::X_MICROSOFT_CDO_BUSYSTATUS)
                .and_then(Property::as_text),
            Some("FREE")
        );
    }

    #[test]
    fn uids_are_stable_and_distinct() {
        let events = project(&build_year(2025).unwrap());
        let again = project(&build_year(2025).unwrap());

        let uids: Vec<_> = events.iter().map(event_uid).collect();
        assert_eq!(uids, again.iter().map(event_uid).collect::<Vec<_>>());

        let unique: std::collections::HashSet<_> = uids.iter().collect();
        assert_eq!(unique.len(), uids.len());
    }

    #[test]
    fn blank_header_fields_are_rejected() {
        let mut blank_name = header();
        blank_name.calendar_name = "   ".to_owned();
        assert!(matches!(
            to_icalendar(&[], &blank_name),
            Err(RfcError::ValidationError(_))
        ));

        let mut blank_product = header();
        blank_product.product_id = String::new();
        assert!(to_icalendar(&[], &blank_product).is_err());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut events = project(&build_year(2024).unwrap());
        events[4].title = String::new();
        assert!(matches!(
            to_icalendar(&events, &header()),
            Err(RfcError::ValidationError(_))
        ));
    }
}
