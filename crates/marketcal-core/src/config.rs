use anyhow::Result;
use config::Config;
use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;

use crate::constants::{DEFAULT_CALENDAR_NAME, DEFAULT_PRODUCT_ID, MARKET_HOLIDAYS_OUTPUT_PATH};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub output_path: String,
    pub product_id: String,
    pub calendar_name: String,
    pub start_year: Option<i32>,
    pub years_ahead: u16,
}

impl CalendarConfig {
    /// ## Summary
    /// Returns the inclusive `(start, end)` year pair to generate.
    ///
    /// `current_year` is only consulted when no explicit `start_year` is configured.
    ///
    /// ## Errors
    /// Returns an error if the end year does not fit in an `i32`.
    pub fn year_span(&self, current_year: i32) -> CoreResult<(i32, i32)> {
        let start = self.start_year.unwrap_or(current_year);
        let end = start
            .checked_add(i32::from(self.years_ahead))
            .ok_or_else(|| {
                CoreError::ValidationError(format!(
                    "years_ahead {} overflows start year {start}",
                    self.years_ahead
                ))
            })?;
        Ok((start, end))
    }
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be registered.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("calendar.output_path", MARKET_HOLIDAYS_OUTPUT_PATH)?
            .set_default("calendar.product_id", DEFAULT_PRODUCT_ID)?
            .set_default("calendar.calendar_name", DEFAULT_CALENDAR_NAME)?
            .set_default("calendar.years_ahead", 1)?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and `config.toml` into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// Nested keys use a double underscore, e.g. `MARKETCAL_CALENDAR__OUTPUT_PATH`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("MARKETCAL")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    Settings::load()
}
