//! Turning projected holiday events into a published iCalendar document.

mod ical;
mod publish;
mod sink;

pub use ical::{CalendarHeader, PUBLISH_METHOD, event_uid, to_icalendar};
pub use publish::{PublishReport, publish, publish_configured, render};
pub use sink::{CalendarSink, FileSink, MemorySink};
