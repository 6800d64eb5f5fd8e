//! Output formatting for the smoke CLI

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use evhub_smoke::scenario::{ScenarioReport, StepStatus, SuiteReport};
use evhub_smoke::ScenarioKind;

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Plain text format
    Plain,
}

/// Print a suite report.
pub fn print_suite(report: &SuiteReport, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic);

            table.set_header(vec!["Scenario", "Result", "Steps", "Duration (ms)"]);
            for scenario in &report.scenarios {
                table.add_row(vec![
                    scenario.scenario.clone(),
                    result_cell(scenario),
                    step_summary(scenario),
                    scenario.duration_ms.to_string(),
                ]);
            }
            println!("{table}");

            // Step detail only for scenarios that did not pass.
            for scenario in report.scenarios.iter().filter(|s| !s.passed) {
                println!();
                print_scenario_steps(scenario);
            }

            println!();
            let summary = format!(
                "{} passed, {} failed ({} ms)",
                report.passed, report.failed, report.duration_ms
            );
            if report.failed == 0 {
                print_success(&summary);
            } else {
                print_error(&summary);
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(report).unwrap_or_default()
            );
        }
        OutputFormat::Plain => {
            for scenario in &report.scenarios {
                let verdict = if scenario.passed { "PASS" } else { "FAIL" };
                println!(
                    "{}: {} ({} ms)",
                    scenario.scenario, verdict, scenario.duration_ms
                );
                print_scenario_steps(scenario);
            }
            println!(
                "{} passed, {} failed ({} ms)",
                report.passed, report.failed, report.duration_ms
            );
        }
    }
}

/// Print the scenario registry.
pub fn print_registry(format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic);

            table.set_header(vec!["Scenario", "Description"]);
            for kind in ScenarioKind::ALL {
                table.add_row(vec![kind.name(), kind.description()]);
            }
            println!("{table}");
        }
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = ScenarioKind::ALL
                .into_iter()
                .map(|kind| {
                    serde_json::json!({
                        "name": kind.name(),
                        "description": kind.description(),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&entries).unwrap_or_default()
            );
        }
        OutputFormat::Plain => {
            for kind in ScenarioKind::ALL {
                println!("{}: {}", kind.name(), kind.description());
            }
        }
    }
}

fn print_scenario_steps(scenario: &ScenarioReport) {
    for step in &scenario.steps {
        let marker = match step.status {
            StepStatus::Passed => "✅",
            StepStatus::ExpectedRejection => "✅ (expected rejection)",
            StepStatus::Failed => "❌",
        };
        match &step.detail {
            Some(detail) => println!("  {marker} {}: {detail}", step.name),
            None => println!("  {marker} {}", step.name),
        }
    }
}

fn result_cell(scenario: &ScenarioReport) -> String {
    if scenario.passed {
        "PASS".green().to_string()
    } else {
        "FAIL".red().to_string()
    }
}

/// "n/m" where n counts steps that went as scripted (passed or rejected as
/// expected).
fn step_summary(scenario: &ScenarioReport) -> String {
    let ok = scenario
        .steps
        .iter()
        .filter(|s| s.status != StepStatus::Failed)
        .count();
    format!("{}/{}", ok, scenario.steps.len())
}

/// Print success message
pub fn print_success(message: &str) {
    println!("✅ {}", message);
}

/// Print error message
pub fn print_error(message: &str) {
    eprintln!("❌ {}", message);
}
