pub use marketcal_core::config::*;

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

/// ## Summary
/// Parses the configured `logging.level` into a tracing filter.
///
/// Accepts anything `EnvFilter` does, from a bare level (`debug`) to
/// per-target directives (`info,marketcal_service=trace`).
///
/// ## Errors
/// Returns a `ConfigError` if the directive string cannot be parsed.
pub fn log_filter(logging: &LoggingConfig) -> AppResult<EnvFilter> {
    EnvFilter::try_new(logging.level.as_str()).map_err(|e| {
        AppError::CoreError(marketcal_core::error::CoreError::ConfigError(format!(
            "invalid logging.level {:?}: {e}",
            logging.level
        )))
    })
}
