//! Scenario registry and result types
//!
//! A scenario is an independently runnable sequence of API calls against one
//! resource. The registry maps stable names to scenario kinds so the CLI
//! surface stays decoupled from the test logic.

use serde::{Deserialize, Serialize};

use crate::error::SmokeError;

/// How a single step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// The call succeeded and any checks on its result held.
    Passed,
    /// The API refused a deliberately invalid request with HTTP 400, which
    /// is what the step exists to confirm.
    ExpectedRejection,
    Failed,
}

/// Record of one API interaction within a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutcome {
    pub name: String,
    pub status: StepStatus,
    /// Result data or error text, for the report.
    pub detail: Option<String>,
}

impl StepOutcome {
    pub fn passed(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: StepStatus::Passed,
            detail: Some(detail.into()),
        }
    }

    pub fn rejected(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: StepStatus::ExpectedRejection,
            detail: Some(detail.into()),
        }
    }

    pub fn failed(name: &str, error: &SmokeError) -> Self {
        Self {
            name: name.to_string(),
            status: StepStatus::Failed,
            detail: Some(error.to_string()),
        }
    }
}

/// Result of running one scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub passed: bool,
    pub duration_ms: u64,
    pub steps: Vec<StepOutcome>,
    /// The error that aborted the scenario, if any.
    pub error: Option<String>,
}

/// Result of running a set of scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub scenarios: Vec<ScenarioReport>,
}

/// The four scenario groups, in suite execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    Contact,
    Events,
    Registrations,
    Subscribers,
}

impl ScenarioKind {
    /// Suite execution order.
    pub const ALL: [ScenarioKind; 4] = [
        ScenarioKind::Contact,
        ScenarioKind::Events,
        ScenarioKind::Registrations,
        ScenarioKind::Subscribers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScenarioKind::Contact => "contact",
            ScenarioKind::Events => "events",
            ScenarioKind::Registrations => "registrations",
            ScenarioKind::Subscribers => "subscribers",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScenarioKind::Contact => "Contact form: valid submission, invalid submission rejected",
            ScenarioKind::Events => "Events: create, list, get, update, delete (204)",
            ScenarioKind::Registrations => {
                "Registrations: create against an event, list, filter by event id"
            }
            ScenarioKind::Subscribers => {
                "Subscribers: create, list, duplicate email rejected, opt-out (204)"
            }
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}
