use chrono::{DateTime, Datelike, Utc};

use marketcal_core::config::CalendarConfig;
use marketcal_rfc::rfc::ical::serialize;

use super::ical::{CalendarHeader, to_icalendar};
use super::sink::{CalendarSink, FileSink};
use crate::error::ServiceResult;
use crate::holiday::{YearRange, build_range, project};

/// Outcome of a successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub range: YearRange,
    /// Number of VEVENTs written.
    pub events: usize,
    /// Size of the document in bytes.
    pub bytes: usize,
    /// Where the sink stored the document.
    pub location: String,
}

/// ## Summary
/// Builds, projects and serializes the holidays of `range` into an
/// iCalendar document.
///
/// ## Errors
/// Returns `InvalidRule` if a holiday cannot be resolved, or
/// `Serialization` if the document cannot be produced from `header`.
pub fn render(range: YearRange, header: &CalendarHeader) -> ServiceResult<(String, usize)> {
    let holidays = build_range(range.start(), range.end())?;
    let events = project(&holidays);
    let ical = to_icalendar(&events, header)?;
    Ok((serialize(&ical)?, events.len()))
}

/// ## Summary
/// Renders the holidays of `range` and hands the document to `sink`.
///
/// ## Side Effects
/// - Calls `sink.persist` exactly once, and only after serialization succeeded
///
/// ## Errors
/// Returns an error if:
/// - A holiday rule cannot be resolved (`InvalidRule`)
/// - The calendar cannot be serialized (`Serialization`)
/// - The sink fails to store the document (`Io`)
#[tracing::instrument(skip(range, header, sink), fields(
    range = %range,
    calendar_name = %header.calendar_name,
    location = %sink.location()
))]
pub fn publish<S>(
    range: YearRange,
    header: &CalendarHeader,
    sink: &mut S,
) -> ServiceResult<PublishReport>
where
    S: CalendarSink + ?Sized,
{
    tracing::debug!("Rendering holiday calendar");
    let (document, events) = render(range, header)?;

    sink.persist(&document)?;

    let report = PublishReport {
        range,
        events,
        bytes: document.len(),
        location: sink.location(),
    };
    tracing::info!(
        events = report.events,
        bytes = report.bytes,
        location = %report.location,
        "Published holiday calendar"
    );
    Ok(report)
}

/// ## Summary
/// Publishes the configured calendar to its configured file.
///
/// `now` supplies both the default start year and the `DTSTAMP`.
///
/// ## Errors
/// Returns `CoreError` if the configured span overflows, `InvalidRange` if it
/// is unsupported, and otherwise whatever [`publish`] returns.
pub fn publish_configured(
    config: &CalendarConfig,
    now: DateTime<Utc>,
) -> ServiceResult<PublishReport> {
    let (start, end) = config.year_span(now.year())?;
    let range = YearRange::new(start, end)?;
    let header = CalendarHeader::from_config(config, now);
    let mut sink = FileSink::new(&config.output_path);
    publish(range, &header, &mut sink)
}
