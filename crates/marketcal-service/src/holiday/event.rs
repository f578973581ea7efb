use chrono::NaiveDate;
use serde::Serialize;

use super::set::HolidayInstance;

/// Free/busy hint carried by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusyStatus {
    Free,
    Busy,
}

impl BusyStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Busy => "BUSY",
        }
    }
}

/// VEVENT `STATUS` values (RFC 5545 §3.8.1.11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Tentative,
    Confirmed,
    Cancelled,
}

impl EventStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tentative => "TENTATIVE",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// An all-day calendar entry ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    pub description: String,
    /// Date-only start; carries no time zone.
    pub start: NaiveDate,
    pub all_day: bool,
    pub duration_days: u32,
    pub busy_status: BusyStatus,
    pub status: EventStatus,
}

impl From<&HolidayInstance> for CalendarEvent {
    fn from(holiday: &HolidayInstance) -> Self {
        Self {
            title: holiday.name.to_owned(),
            description: holiday.description.to_owned(),
            start: holiday.date,
            all_day: true,
            duration_days: 1,
            busy_status: BusyStatus::Free,
            status: EventStatus::Confirmed,
        }
    }
}

/// ## Summary
/// Maps each holiday to a confirmed, free, one-day event, preserving order.
#[must_use]
pub fn project(holidays: &[HolidayInstance]) -> Vec<CalendarEvent> {
    holidays.iter().map(CalendarEvent::from).collect()
}
