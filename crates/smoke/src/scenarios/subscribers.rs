//! Subscribers scenario: create, list, confirm the unique-email rule, then
//! opt out (soft delete, must answer 204).
//!
//! The email embeds a timestamp suffix so runs against a persistent server
//! don't trip the uniqueness rule on the first create; the duplicate step
//! reuses the identical payload so the rule itself is still exercised.

use std::time::Instant;

use crate::client::ApiClient;
use crate::error::SmokeResult;
use crate::model::NewSubscriber;
use crate::scenario::{ScenarioKind, ScenarioReport, StepOutcome};

use super::{check, expect_rejection, report, step, unique_suffix};

pub async fn run(client: &ApiClient) -> ScenarioReport {
    let start = Instant::now();
    let mut steps = Vec::new();
    let outcome = drive(client, &mut steps).await;
    report(ScenarioKind::Subscribers, start, steps, outcome)
}

async fn drive(client: &ApiClient, steps: &mut Vec<StepOutcome>) -> SmokeResult<()> {
    let payload = NewSubscriber {
        name: "Test Subscriber".to_string(),
        email: format!("subscriber+{}@example.com", unique_suffix()),
    };

    let created = step(
        steps,
        "create subscriber",
        |subscriber| format!("id {}", subscriber.id),
        client.create_subscriber(&payload),
    )
    .await?;

    let listed = step(
        steps,
        "list subscribers",
        |subscribers| format!("{} subscriber(s)", subscribers.len()),
        client.list_subscribers(),
    )
    .await?;
    check(
        steps,
        "created subscriber present in list",
        listed.iter().any(|subscriber| subscriber.id == created.id),
        format!("id {}", created.id),
    )?;

    expect_rejection(
        steps,
        "duplicate subscriber email rejected",
        "duplicate subscriber email",
        client.create_subscriber(&payload),
    )
    .await?;

    step(
        steps,
        "opt out subscriber",
        |_| "204 no content".to_string(),
        client.opt_out_subscriber(created.id),
    )
    .await?;

    Ok(())
}
