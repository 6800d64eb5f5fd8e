//! Registrations scenario: register an email against a freshly created
//! event, then verify listing and the `?event={id}` filter.

use std::time::Instant;

use chrono::{SubsecRound, Utc};

use crate::client::ApiClient;
use crate::error::SmokeResult;
use crate::model::NewRegistration;
use crate::scenario::{ScenarioKind, ScenarioReport, StepOutcome};

use super::{check, report, sample_event, step};

pub async fn run(client: &ApiClient) -> ScenarioReport {
    let start = Instant::now();
    let mut steps = Vec::new();
    let outcome = drive(client, &mut steps).await;
    report(ScenarioKind::Registrations, start, steps, outcome)
}

async fn drive(client: &ApiClient, steps: &mut Vec<StepOutcome>) -> SmokeResult<()> {
    let event = step(
        steps,
        "create prerequisite event",
        |event| format!("id {}", event.id),
        client.create_event(&sample_event("Registration Test Event")),
    )
    .await?;

    let payload = NewRegistration {
        date_registered: Utc::now().trunc_subsecs(0),
        email: "test@example.com".to_string(),
        event: event.id,
    };
    let created = step(
        steps,
        "create registration",
        |registration| format!("id {}", registration.id),
        client.create_registration(&payload),
    )
    .await?;

    let all = step(
        steps,
        "list registrations",
        |registrations| format!("{} registration(s)", registrations.len()),
        client.list_registrations(),
    )
    .await?;
    check(
        steps,
        "created registration present in list",
        all.iter().any(|registration| registration.id == created.id),
        format!("id {}", created.id),
    )?;

    let filtered = step(
        steps,
        "filter registrations by event",
        |registrations| format!("{} registration(s)", registrations.len()),
        client.list_registrations_for_event(event.id),
    )
    .await?;
    check(
        steps,
        "every filtered row references the event",
        !filtered.is_empty()
            && filtered
                .iter()
                .all(|registration| registration.event == Some(event.id)),
        format!("event {}", event.id),
    )?;

    Ok(())
}
