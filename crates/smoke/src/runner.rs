//! Suite runner: executes scenarios strictly sequentially and aggregates
//! the results.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::client::ApiClient;
use crate::config::HarnessConfig;
use crate::error::{SmokeError, SmokeResult};
use crate::scenario::{ScenarioKind, ScenarioReport, SuiteReport};
use crate::scenarios;

/// Runs scenario groups against one API deployment.
pub struct SuiteRunner {
    config: HarnessConfig,
    client: ApiClient,
}

impl SuiteRunner {
    pub fn new(config: HarnessConfig) -> SmokeResult<Self> {
        let client = ApiClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// The client scenarios run against. Exposed for one-off probes.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Run a single scenario group.
    pub async fn run_scenario(&self, kind: ScenarioKind) -> ScenarioReport {
        debug!("Running scenario: {}", kind.name());
        let report = match kind {
            ScenarioKind::Contact => scenarios::contact::run(&self.client).await,
            ScenarioKind::Events => scenarios::events::run(&self.client).await,
            ScenarioKind::Registrations => scenarios::registrations::run(&self.client).await,
            ScenarioKind::Subscribers => scenarios::subscribers::run(&self.client).await,
        };

        if report.passed {
            info!("✓ {} ({} ms)", report.scenario, report.duration_ms);
        } else {
            error!(
                "✗ {} - {}",
                report.scenario,
                report.error.as_deref().unwrap_or("unknown error")
            );
        }
        report
    }

    /// Run a scenario looked up by its registry name.
    pub async fn run_named(&self, name: &str) -> SmokeResult<ScenarioReport> {
        let kind = ScenarioKind::from_name(name)
            .ok_or_else(|| SmokeError::UnknownScenario(name.to_string()))?;
        Ok(self.run_scenario(kind).await)
    }

    /// Run the given scenarios in order, each awaited to completion before
    /// the next starts, so output ordering is deterministic.
    pub async fn run(&self, kinds: &[ScenarioKind]) -> SuiteReport {
        let start = Instant::now();
        info!(
            "Running {} scenario(s) against {}",
            kinds.len(),
            self.client.base_url()
        );

        let mut reports = Vec::new();
        let mut passed = 0;
        let mut failed = 0;

        for kind in kinds {
            let report = self.run_scenario(*kind).await;
            if report.passed {
                passed += 1;
            } else {
                failed += 1;
            }
            reports.push(report);
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        info!("");
        info!(
            "Scenario results: {} passed, {} failed ({} ms)",
            passed, failed, duration_ms
        );

        SuiteReport {
            total: kinds.len(),
            passed,
            failed,
            duration_ms,
            scenarios: reports,
        }
    }

    /// Run all four scenario groups in registry order.
    pub async fn run_all(&self) -> SuiteReport {
        self.run(&ScenarioKind::ALL).await
    }

    /// Write the suite report as JSON into the configured output directory.
    /// Returns the path written, or None when no output directory is set.
    pub fn write_report(&self, report: &SuiteReport) -> SmokeResult<Option<PathBuf>> {
        let Some(dir) = &self.config.output_dir else {
            return Ok(None);
        };

        std::fs::create_dir_all(dir)?;
        let path = dir.join("smoke-report.json");
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(&path, json)?;

        info!("Report written to: {}", path.display());
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_named_rejects_unknown_scenario() {
        let runner = SuiteRunner::new(HarnessConfig::default()).unwrap();
        match runner.run_named("bogus").await {
            Err(SmokeError::UnknownScenario(name)) => assert_eq!(name, "bogus"),
            other => panic!("expected UnknownScenario, got {other:?}"),
        }
    }

    #[test]
    fn test_no_output_dir_means_no_report_file() {
        let runner = SuiteRunner::new(HarnessConfig::default()).unwrap();
        let report = SuiteReport {
            total: 0,
            passed: 0,
            failed: 0,
            duration_ms: 0,
            scenarios: vec![],
        };
        assert!(runner.write_report(&report).unwrap().is_none());
    }
}
