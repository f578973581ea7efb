//! iCalendar core models (RFC 5545).
//!
//! Covers the subset needed to publish all-day event feeds: VCALENDAR and
//! VEVENT components, their properties and parameters, and the TEXT, DATE,
//! DATE-TIME and DURATION value types.

mod component;
mod datetime;
mod duration;
mod parameter;
mod property;
mod value;

pub use component::{Component, ComponentKind, ICalendar};
pub use datetime::DateTime;
pub use duration::Duration;
pub use parameter::Parameter;
pub use property::{Property, names};
pub use value::{Date, Value};
