/// Output location shared by the binary and its defaults
pub const ICS_OUTPUT_DIR: &str = "./docs/ics";
pub const MARKET_HOLIDAYS_FILE_NAME: &str = "marketHolidays.ics";
pub const MARKET_HOLIDAYS_OUTPUT_PATH: &str =
    const_str::concat!(ICS_OUTPUT_DIR, "/", MARKET_HOLIDAYS_FILE_NAME);

/// Calendar header defaults
pub const DEFAULT_PRODUCT_ID: &str = "US Market Holidays Calendar";
pub const DEFAULT_CALENDAR_NAME: &str = "美股休市日历 (US Market Holidays)";

/// Namespace for deterministic event UIDs (UUIDv5).
pub const EVENT_UID_NAMESPACE: &str = "marketcal.holidays";
