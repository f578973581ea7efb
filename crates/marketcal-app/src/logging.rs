//! Process-wide tracing setup.

use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

use crate::config::{LoggingConfig, log_filter};

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// ## Summary
/// Installs the global subscriber with a reloadable filter at `initial`.
///
/// The filter starts permissive so configuration loading itself is logged;
/// [`apply_config`] narrows it once settings are known.
#[must_use]
pub fn init(initial: &str) -> FilterHandle {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(initial));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    filter_handle
}

/// Swaps in the configured filter, keeping the current one if it is invalid.
pub fn apply_config(handle: &FilterHandle, logging: &LoggingConfig) {
    match log_filter(logging) {
        Ok(filter) => {
            if let Err(e) = handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter from config");
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Invalid log level in config, keeping current filter");
        }
    }
}
