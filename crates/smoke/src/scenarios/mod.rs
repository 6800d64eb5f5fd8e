//! The four scenario groups
//!
//! Each group is an independently runnable async procedure that performs a
//! scripted sequence of API calls, records a [`StepOutcome`] per call, and
//! aborts on the first unexpected failure. Deliberate-rejection steps
//! (invalid contact form, duplicate subscriber email) count as successes
//! when the API refuses them with HTTP 400, and as regression failures when
//! the API lets them through.

pub mod contact;
pub mod events;
pub mod registrations;
pub mod subscribers;

use std::future::Future;
use std::time::Instant;

use chrono::{Duration, SubsecRound, Utc};
use tracing::{error, info};

use crate::error::{SmokeError, SmokeResult};
use crate::model::NewEvent;
use crate::scenario::{ScenarioKind, ScenarioReport, StepOutcome};

/// Event payload used by the events and registrations groups: dated one
/// week out, subsecond precision dropped so round-trip equality holds
/// against servers that store second resolution.
fn sample_event(title: &str) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        description: "Test Description".to_string(),
        eventdatetime: (Utc::now() + Duration::days(7)).trunc_subsecs(0),
        address: "123 Test St".to_string(),
        price: "99.99".to_string(),
    }
}

/// Timestamp-derived suffix so repeated runs against a persistent server
/// don't collide with unique-email rules from earlier runs.
fn unique_suffix() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Run one API call as a recorded step. Propagates the error after
/// recording it, which aborts the rest of the group.
async fn step<T, F, D>(
    steps: &mut Vec<StepOutcome>,
    name: &str,
    detail: D,
    call: F,
) -> SmokeResult<T>
where
    F: Future<Output = SmokeResult<T>>,
    D: FnOnce(&T) -> String,
{
    match call.await {
        Ok(value) => {
            let detail = detail(&value);
            info!("✅ {name}: {detail}");
            steps.push(StepOutcome::passed(name, detail));
            Ok(value)
        }
        Err(e) => {
            error!("❌ {name}: {e}");
            steps.push(StepOutcome::failed(name, &e));
            Err(e)
        }
    }
}

/// Run an API call the server is expected to refuse with HTTP 400. Any
/// other error is an unexpected failure; a completed request means the
/// validation rule is no longer enforced and is reported as a regression.
async fn expect_rejection<T, F>(
    steps: &mut Vec<StepOutcome>,
    name: &str,
    what: &str,
    call: F,
) -> SmokeResult<()>
where
    F: Future<Output = SmokeResult<T>>,
{
    match call.await {
        Err(e) if e.is_validation_rejection() => {
            info!("✅ {name}: {e}");
            steps.push(StepOutcome::rejected(name, e.to_string()));
            Ok(())
        }
        Err(e) => {
            error!("❌ {name}: {e}");
            steps.push(StepOutcome::failed(name, &e));
            Err(e)
        }
        Ok(_) => {
            let e = SmokeError::Regression(format!("{what} was accepted by the API"));
            error!("❌ {name}: {e}");
            steps.push(StepOutcome::failed(name, &e));
            Err(e)
        }
    }
}

/// Record an assertion about data already fetched.
fn check(
    steps: &mut Vec<StepOutcome>,
    name: &str,
    holds: bool,
    detail: String,
) -> SmokeResult<()> {
    if holds {
        info!("✅ {name}: {detail}");
        steps.push(StepOutcome::passed(name, detail));
        Ok(())
    } else {
        let e = SmokeError::AssertionFailed(format!("{name}: {detail}"));
        error!("❌ {e}");
        steps.push(StepOutcome::failed(name, &e));
        Err(e)
    }
}

fn report(
    kind: ScenarioKind,
    start: Instant,
    steps: Vec<StepOutcome>,
    outcome: SmokeResult<()>,
) -> ScenarioReport {
    let error = outcome.err().map(|e| e.to_string());
    ScenarioReport {
        scenario: kind.name().to_string(),
        passed: error.is_none(),
        duration_ms: start.elapsed().as_millis() as u64,
        steps,
        error,
    }
}
