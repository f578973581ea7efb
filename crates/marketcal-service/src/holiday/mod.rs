//! US stock-market holiday computation.
//!
//! Rules ([`HolidayRule`]) are resolved against a year by [`resolve`];
//! [`build_year`] applies the ten canonical definitions and [`build_range`]
//! concatenates years. [`project`] turns the result into calendar events.

mod easter;
mod event;
mod resolve;
mod rule;
mod set;

pub use easter::{easter_month_day, easter_sunday};
pub use event::{BusyStatus, CalendarEvent, EventStatus, project};
pub use resolve::resolve;
pub use rule::{HolidayDefinition, HolidayRule, US_MARKET_HOLIDAYS};
pub use set::{
    HolidayInstance, SUPPORTED_YEARS, YearRange, build_range, build_year, build_year_with,
};
