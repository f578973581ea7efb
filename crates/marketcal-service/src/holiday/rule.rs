use chrono::Weekday;

/// How a holiday's date is derived for a given year.
///
/// Months are 1-based. Weekday ordinals are resolved relative to the first
/// (or last) day of the month, never from a week grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayRule {
    /// Same month and day every year.
    FixedDate { month: u32, day: u32 },
    /// The `n`-th occurrence (1-based) of `weekday` in `month`.
    NthWeekday { month: u32, weekday: Weekday, n: u32 },
    /// The final occurrence of `weekday` in `month`.
    LastWeekday { month: u32, weekday: Weekday },
    /// Signed day offset from Gregorian Easter Sunday.
    EasterRelative { offset_days: i64 },
}

/// A named holiday bound to the rule that places it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub rule: HolidayRule,
}

impl HolidayDefinition {
    #[must_use]
    pub const fn new(name: &'static str, description: &'static str, rule: HolidayRule) -> Self {
        Self {
            name,
            description,
            rule,
        }
    }
}

/// NYSE full-day closures, in the order they are emitted for each year.
///
/// Weekend observance shifts are not applied; every date is the nominal
/// rule date.
pub const US_MARKET_HOLIDAYS: [HolidayDefinition; 10] = [
    HolidayDefinition::new(
        "New Year's Day",
        "US stock market closed for New Year's Day",
        HolidayRule::FixedDate { month: 1, day: 1 },
    ),
    HolidayDefinition::new(
        "Martin Luther King Jr. Day",
        "US stock market closed for Martin Luther King Jr. Day",
        HolidayRule::NthWeekday {
            month: 1,
            weekday: Weekday::Mon,
            n: 3,
        },
    ),
    HolidayDefinition::new(
        "Presidents' Day",
        "US stock market closed for Presidents' Day",
        HolidayRule::NthWeekday {
            month: 2,
            weekday: Weekday::Mon,
            n: 3,
        },
    ),
    HolidayDefinition::new(
        "Good Friday",
        "US stock market closed for Good Friday",
        HolidayRule::EasterRelative { offset_days: -2 },
    ),
    HolidayDefinition::new(
        "Memorial Day",
        "US stock market closed for Memorial Day",
        HolidayRule::LastWeekday {
            month: 5,
            weekday: Weekday::Mon,
        },
    ),
    HolidayDefinition::new(
        "Juneteenth",
        "US stock market closed for Juneteenth National Independence Day",
        HolidayRule::FixedDate { month: 6, day: 19 },
    ),
    HolidayDefinition::new(
        "Independence Day",
        "US stock market closed for Independence Day",
        HolidayRule::FixedDate { month: 7, day: 4 },
    ),
    HolidayDefinition::new(
        "Labor Day",
        "US stock market closed for Labor Day",
        HolidayRule::NthWeekday {
            month: 9,
            weekday: Weekday::Mon,
            n: 1,
        },
    ),
    HolidayDefinition::new(
        "Thanksgiving Day",
        "US stock market closed for Thanksgiving Day",
        HolidayRule::NthWeekday {
            month: 11,
            weekday: Weekday::Thu,
            n: 4,
        },
    ),
    HolidayDefinition::new(
        "Christmas Day",
        "US stock market closed for Christmas Day",
        HolidayRule::FixedDate { month: 12, day: 25 },
    ),
];
