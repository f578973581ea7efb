use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::Serialize;

use super::resolve::resolve;
use super::rule::{HolidayDefinition, US_MARKET_HOLIDAYS};
use crate::error::{ServiceError, ServiceResult};

/// Years for which holidays can be generated.
///
/// The lower bound is the first full Gregorian year; the upper bound keeps
/// every date within the four-digit years iCalendar can carry.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1583..=9999;

/// A holiday resolved to a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayInstance {
    pub date: NaiveDate,
    pub name: &'static str,
    pub description: &'static str,
}

/// A validated, inclusive span of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// ## Errors
    /// Returns `InvalidRange` when `start > end` or either bound lies outside
    /// [`SUPPORTED_YEARS`].
    pub fn new(start: i32, end: i32) -> ServiceResult<Self> {
        if start > end {
            return Err(ServiceError::InvalidRange {
                start,
                end,
                reason: "start year is after end year",
            });
        }
        if !SUPPORTED_YEARS.contains(&start) || !SUPPORTED_YEARS.contains(&end) {
            return Err(ServiceError::InvalidRange {
                start,
                end,
                reason: "years must lie within 1583..=9999",
            });
        }
        Ok(Self { start, end })
    }

    /// A range covering one year.
    ///
    /// ## Errors
    /// Returns `InvalidRange` if `year` is unsupported.
    pub fn single(year: i32) -> ServiceResult<Self> {
        Self::new(year, year)
    }

    #[must_use]
    pub const fn start(self) -> i32 {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> i32 {
        self.end
    }

    /// Number of years covered, always at least one.
    #[must_use]
    pub const fn year_count(self) -> u32 {
        self.end.abs_diff(self.start) + 1
    }

    /// Years in ascending order.
    #[must_use]
    pub fn years(self) -> RangeInclusive<i32> {
        self.start..=self.end
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// ## Summary
/// Resolves `definitions` for a single year, preserving their order.
///
/// ## Errors
/// Returns the first rule that cannot be resolved in `year`.
pub fn build_year_with(
    definitions: &[HolidayDefinition],
    year: i32,
) -> ServiceResult<Vec<HolidayInstance>> {
    definitions
        .iter()
        .map(|definition| {
            Ok(HolidayInstance {
                date: resolve(&definition.rule, year)?,
                name: definition.name,
                description: definition.description,
            })
        })
        .collect()
}

/// ## Summary
/// Returns the ten US market holidays for `year` in canonical order.
///
/// ## Errors
/// Returns `InvalidRule` if `year` is outside [`SUPPORTED_YEARS`].
pub fn build_year(year: i32) -> ServiceResult<Vec<HolidayInstance>> {
    build_year_with(&US_MARKET_HOLIDAYS, year)
}

/// ## Summary
/// Returns the holidays of every year from `start` to `end` inclusive: the
/// years in ascending order, each contributing its canonical block.
///
/// ## Errors
/// Returns `InvalidRange` when `start > end` or a bound is unsupported.
#[tracing::instrument(level = "debug")]
pub fn build_range(start: i32, end: i32) -> ServiceResult<Vec<HolidayInstance>> {
    let range = YearRange::new(start, end)?;
    let holidays = range
        .years()
        .map(build_year)
        .collect::<ServiceResult<Vec<_>>>()?
        .concat();
    tracing::debug!(count = holidays.len(), "Built holiday range");
    Ok(holidays)
}
