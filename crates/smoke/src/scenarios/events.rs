//! Events scenario: full CRUD pass over one event.
//!
//! create → list → get-by-id (round-trip field check) → full-payload update
//! (verified by re-fetch) → delete (must answer 204).

use std::time::Instant;

use crate::client::ApiClient;
use crate::error::SmokeResult;
use crate::scenario::{ScenarioKind, ScenarioReport, StepOutcome};

use super::{check, report, sample_event, step};

pub async fn run(client: &ApiClient) -> ScenarioReport {
    let start = Instant::now();
    let mut steps = Vec::new();
    let outcome = drive(client, &mut steps).await;
    report(ScenarioKind::Events, start, steps, outcome)
}

async fn drive(client: &ApiClient, steps: &mut Vec<StepOutcome>) -> SmokeResult<()> {
    let payload = sample_event("Test Event");

    let created = step(
        steps,
        "create event",
        |event| format!("id {}", event.id),
        client.create_event(&payload),
    )
    .await?;

    let listed = step(
        steps,
        "list events",
        |events| format!("{} event(s)", events.len()),
        client.list_events(),
    )
    .await?;
    check(
        steps,
        "created event present in list",
        listed.iter().any(|event| event.id == created.id),
        format!("id {}", created.id),
    )?;

    let fetched = step(
        steps,
        "get event by id",
        |event| event.title.clone(),
        client.get_event(created.id),
    )
    .await?;
    check(
        steps,
        "fetched fields equal submitted fields",
        fetched.title == payload.title
            && fetched.description == payload.description
            && fetched.eventdatetime == payload.eventdatetime
            && fetched.address == payload.address
            && fetched.price == payload.price,
        format!("id {}", created.id),
    )?;

    let mut replacement = payload.clone();
    replacement.title = "Updated Test Event".to_string();
    step(
        steps,
        "update event",
        |event| event.title.clone(),
        client.update_event(created.id, &replacement),
    )
    .await?;

    let refetched = step(
        steps,
        "re-fetch after update",
        |event| event.title.clone(),
        client.get_event(created.id),
    )
    .await?;
    check(
        steps,
        "update visible on re-fetch",
        refetched.title == replacement.title,
        format!("title '{}'", refetched.title),
    )?;

    step(
        steps,
        "delete event",
        |_| "204 no content".to_string(),
        client.delete_event(created.id),
    )
    .await?;

    Ok(())
}
