//! Gregorian Easter Sunday.

use chrono::NaiveDate;

use super::set::SUPPORTED_YEARS;
use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Returns the `(month, day)` of Gregorian Easter Sunday using the anonymous
/// Gregorian algorithm (Meeus/Jones/Butcher).
///
/// Every intermediate stays non-negative for any `year`, so plain unsigned
/// arithmetic is exact.
#[must_use]
#[expect(clippy::many_single_char_names)]
pub const fn easter_month_day(year: u32) -> (u32, u32) {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b + 1 - f) / 3;
    let h = (19 * a + b + 15 - d - g) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l + 114 - 7 * m) / 31;
    let day = (h + l + 114 - 7 * m) % 31 + 1;
    (month, day)
}

/// ## Summary
/// Returns the date of Gregorian Easter Sunday for `year`.
///
/// ## Errors
/// Returns `InvalidRule` for years outside the supported Gregorian range.
pub fn easter_sunday(year: i32) -> ServiceResult<NaiveDate> {
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(ServiceError::InvalidRule(format!(
            "Easter is only computed for years {}..={}, got {year}",
            SUPPORTED_YEARS.start(),
            SUPPORTED_YEARS.end()
        )));
    }
    let unsigned = u32::try_from(year)
        .map_err(|e| ServiceError::InvalidRule(format!("year {year}: {e}")))?;
    let (month, day) = easter_month_day(unsigned);
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ServiceError::InvalidRule(format!("Easter {year}-{month:02}-{day:02} is not a date"))
    })
}
