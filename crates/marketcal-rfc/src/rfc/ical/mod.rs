//! iCalendar RFC 5545 implementation.
//!
//! - `core`: Type definitions for iCalendar structures
//! - `build`: Serializers for iCalendar content
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use marketcal_rfc::rfc::ical::{build, core::*};
//!
//! let mut ical = ICalendar::new("-//My App//EN");
//! let mut event = Component::event();
//! event.add_property(Property::text("UID", "my-event-1"));
//! event.add_property(Property::datetime("DTSTAMP", DateTime::utc(2026, 1, 1, 0, 0, 0)));
//! event.add_property(Property::date(
//!     "DTSTART",
//!     Date::from(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
//! ));
//! event.add_property(Property::text("SUMMARY", "New Year's Day"));
//! ical.add_event(event);
//!
//! let output = build::serialize(&ical).unwrap();
//! assert!(output.contains("DTSTART;VALUE=DATE:20260101\r\n"));
//! ```

pub mod build;
pub mod core;

pub use self::build::serialize;
pub use self::core::{Component, ComponentKind, ICalendar, Parameter, Property};
