use chrono::{Datelike, Days, NaiveDate, TimeDelta, Weekday};

use super::easter::easter_sunday;
use super::rule::HolidayRule;
use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Resolves `rule` to a concrete date in `year`.
///
/// Weekday arithmetic counts days from Sunday (Sunday = 0 .. Saturday = 6)
/// for every rule kind.
///
/// ## Errors
/// Returns `InvalidRule` if the rule names an impossible date: a month
/// outside 1..=12, a day the month does not have, `n == 0`, an `n`-th
/// occurrence past the end of the month, or an Easter offset leaving the
/// representable date range.
pub fn resolve(rule: &HolidayRule, year: i32) -> ServiceResult<NaiveDate> {
    match *rule {
        HolidayRule::FixedDate { month, day } => {
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                ServiceError::InvalidRule(format!("{year}-{month:02}-{day:02} is not a date"))
            })
        }
        HolidayRule::NthWeekday { month, weekday, n } => nth_weekday(year, month, weekday, n),
        HolidayRule::LastWeekday { month, weekday } => last_weekday(year, month, weekday),
        HolidayRule::EasterRelative { offset_days } => {
            let easter = easter_sunday(year)?;
            TimeDelta::try_days(offset_days)
                .and_then(|delta| easter.checked_add_signed(delta))
                .ok_or_else(|| {
                    ServiceError::InvalidRule(format!(
                        "Easter {easter} offset by {offset_days} days is out of range"
                    ))
                })
        }
    }
}

/// Days forward from `from` to the next `to`, 0 when they match.
fn days_until(from: Weekday, to: Weekday) -> u32 {
    (7 + to.num_days_from_sunday() - from.num_days_from_sunday()) % 7
}

fn first_of_month(year: i32, month: u32) -> ServiceResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ServiceError::InvalidRule(format!("month {month} of {year} is not valid")))
}

fn last_of_month(year: i32, month: u32) -> ServiceResult<NaiveDate> {
    let first = first_of_month(year, month)?;
    first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| ServiceError::InvalidRule(format!("month {month} of {year} has no end")))
}

fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u32) -> ServiceResult<NaiveDate> {
    if n == 0 {
        return Err(ServiceError::InvalidRule(format!(
            "occurrence of {weekday} in month {month} must be 1-based, got 0"
        )));
    }
    let first = first_of_month(year, month)?;
    let last = last_of_month(year, month)?;

    let day = (n - 1)
        .checked_mul(7)
        .and_then(|weeks| weeks.checked_add(1 + days_until(first.weekday(), weekday)))
        .filter(|&day| day <= last.day());

    day.and_then(|day| first.with_day(day)).ok_or_else(|| {
        ServiceError::InvalidRule(format!(
            "{year}-{month:02} has no occurrence {n} of {weekday}"
        ))
    })
}

fn last_weekday(year: i32, month: u32, weekday: Weekday) -> ServiceResult<NaiveDate> {
    let last = last_of_month(year, month)?;
    let back = days_until(weekday, last.weekday());
    last.checked_sub_days(Days::new(u64::from(back)))
        .ok_or_else(|| ServiceError::InvalidRule(format!("{year}-{month:02}: no last {weekday}")))
}
