//! Generating each calendar artifact independently.
//!
//! One artifact failing is logged and counted; the rest still run.

use chrono::{DateTime, Utc};

use marketcal_core::config::CalendarConfig;
use marketcal_service::calendar::{PublishReport, publish_configured};

use crate::error::{AppError, AppResult};

type Job<'a> = Box<dyn FnOnce() -> AppResult<PublishReport> + 'a>;

/// A named unit of output, such as one `.ics` file.
pub struct Artifact<'a> {
    pub name: &'static str,
    job: Job<'a>,
}

impl<'a> Artifact<'a> {
    #[must_use]
    pub fn new(name: &'static str, job: impl FnOnce() -> AppResult<PublishReport> + 'a) -> Self {
        Self {
            name,
            job: Box::new(job),
        }
    }
}

impl std::fmt::Debug for Artifact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artifact").field("name", &self.name).finish_non_exhaustive()
    }
}

/// The US market holiday calendar, written where `config` points.
#[must_use]
pub fn market_holidays(config: &CalendarConfig, now: DateTime<Utc>) -> Artifact<'_> {
    Artifact::new("marketHolidays", move || Ok(publish_configured(config, now)?))
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub published: Vec<(&'static str, PublishReport)>,
    pub failed: Vec<&'static str>,
}

impl BatchSummary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// ## Errors
    /// Returns `ArtifactsFailed` naming every artifact that did not publish.
    pub fn into_result(self) -> AppResult<()> {
        if self.is_success() {
            return Ok(());
        }
        Err(AppError::ArtifactsFailed {
            failed: self.failed.len(),
            total: self.failed.len() + self.published.len(),
            names: self.failed.join(", "),
        })
    }
}

/// ## Summary
/// Runs every artifact in order, isolating failures.
///
/// ## Side Effects
/// - Logs each failure at error level and each success at info level
#[must_use]
pub fn run_batch(artifacts: Vec<Artifact<'_>>) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for artifact in artifacts {
        let name = artifact.name;
        match (artifact.job)() {
            Ok(report) => {
                tracing::info!(
                    artifact = name,
                    events = report.events,
                    location = %report.location,
                    "Artifact generated"
                );
                summary.published.push((name, report));
            }
            Err(e) => {
                tracing::error!(artifact = name, error = %e, "Artifact generation failed");
                summary.failed.push(name);
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketcal_service::error::ServiceError;
    use marketcal_service::holiday::YearRange;

    fn report() -> PublishReport {
        PublishReport {
            range: YearRange::single(2026).unwrap(),
            events: 10,
            bytes: 1,
            location: "memory".to_owned(),
        }
    }

    fn failure() -> AppResult<PublishReport> {
        Err(ServiceError::InvalidRule("boom".to_owned()).into())
    }

    #[test_log::test]
    fn failure_does_not_stop_later_artifacts() {
        let mut ran_last = false;
        let summary = run_batch(vec![
            Artifact::new("first", failure),
            Artifact::new("second", || {
                ran_last = true;
                Ok(report())
            }),
        ]);

        assert!(ran_last);
        assert_eq!(summary.failed, vec!["first"]);
        assert_eq!(summary.published.len(), 1);
        assert_eq!(summary.published[0].0, "second");
    }

    #[test]
    fn failed_batch_is_an_error() {
        let summary = run_batch(vec![
            Artifact::new("a", failure),
            Artifact::new("b", || Ok(report())),
            Artifact::new("c", failure),
        ]);
        let err = summary.into_result().unwrap_err();
        assert!(matches!(
            err,
            AppError::ArtifactsFailed {
                failed: 2,
                total: 3,
                ..
            }
        ));
        assert_eq!(err.to_string(), "2 of 3 calendar artifacts failed: a, c");
    }

    #[test]
    fn empty_batch_succeeds() {
        assert!(run_batch(Vec::new()).into_result().is_ok());
    }
}
