//! Contact form scenario: one valid submission, one submission the API must
//! refuse (blank name, malformed email, blank message).

use std::time::Instant;

use crate::client::ApiClient;
use crate::error::SmokeResult;
use crate::model::ContactForm;
use crate::scenario::{ScenarioKind, ScenarioReport, StepOutcome};

use super::{expect_rejection, report, step};

pub async fn run(client: &ApiClient) -> ScenarioReport {
    let start = Instant::now();
    let mut steps = Vec::new();
    let outcome = drive(client, &mut steps).await;
    report(ScenarioKind::Contact, start, steps, outcome)
}

async fn drive(client: &ApiClient, steps: &mut Vec<StepOutcome>) -> SmokeResult<()> {
    let valid = ContactForm {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        message: "This is a test message".to_string(),
    };
    step(
        steps,
        "valid contact form submission",
        |receipt| receipt.message.clone(),
        client.submit_contact(&valid),
    )
    .await?;

    let invalid = ContactForm {
        name: String::new(),
        email: "invalid-email".to_string(),
        message: String::new(),
    };
    expect_rejection(
        steps,
        "invalid contact form rejected",
        "invalid contact form",
        client.submit_contact(&invalid),
    )
    .await
}
