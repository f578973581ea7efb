use chrono::Utc;
use marketcal_app::batch::{market_holidays, run_batch};
use marketcal_app::config::load_config;
use marketcal_app::logging;

fn main() -> anyhow::Result<()> {
    let filter_handle = logging::init("debug");

    tracing::info!("Starting US market holiday calendar generation");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    logging::apply_config(&filter_handle, &config.logging);

    // One clock read: it fixes both the default start year and DTSTAMP.
    let now = Utc::now();

    let summary = run_batch(vec![market_holidays(&config.calendar, now)]);
    summary.into_result()?;

    tracing::info!("All calendar artifacts generated");

    Ok(())
}
