//! EvHub smoke-test CLI - Main Entry Point
//!
//! Runs scripted CRUD scenarios against a deployed EvHub REST API. Each
//! scenario group is triggerable on its own, or the whole suite runs
//! sequentially with `all`. Exit code 0 means every scenario passed, 1
//! means at least one failed, 2 means the harness itself errored.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use evhub_smoke::config::DEFAULT_BASE_URL;
use evhub_smoke::{HarnessConfig, ScenarioKind, SuiteRunner};

mod output;

use output::OutputFormat;

/// Smoke-test harness for the EvHub REST API
#[derive(Parser)]
#[command(name = "evhub-smoke")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// API root to test against
    #[arg(long, env = "EVHUB_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout_secs: u64,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Directory to write the JSON suite report into
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Contact form: valid and deliberately invalid submissions
    Contact,

    /// Events: create, list, get, update, delete
    Events,

    /// Registrations: create against an event, list, filter by event id
    Registrations,

    /// Subscribers: create, list, duplicate email, opt-out
    Subscribers,

    /// Run all scenario groups sequentially
    All,

    /// List the registered scenarios
    List,

    /// Check whether the API is reachable
    Status,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    match rt.block_on(run(cli)) {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = HarnessConfig {
        base_url: cli.base_url.clone(),
        timeout: Duration::from_secs(cli.timeout_secs),
        output_dir: cli.output.clone(),
    };
    let runner = SuiteRunner::new(config)?;

    let kinds: &[ScenarioKind] = match cli.command {
        Commands::List => {
            output::print_registry(cli.format);
            return Ok(true);
        }
        Commands::Status => {
            let up = runner.client().probe().await;
            if up {
                output::print_success(&format!("API is answering at {}", cli.base_url));
            } else {
                output::print_error(&format!("API is not responding at {}", cli.base_url));
            }
            return Ok(up);
        }
        Commands::Contact => &[ScenarioKind::Contact],
        Commands::Events => &[ScenarioKind::Events],
        Commands::Registrations => &[ScenarioKind::Registrations],
        Commands::Subscribers => &[ScenarioKind::Subscribers],
        Commands::All => &ScenarioKind::ALL,
    };

    let report = runner.run(kinds).await;
    runner.write_report(&report)?;
    output::print_suite(&report, cli.format);

    Ok(report.failed == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_scenario_subcommands_map_to_registry() {
        for kind in ScenarioKind::ALL {
            let cli = Cli::try_parse_from(["evhub-smoke", kind.name()]).unwrap();
            let mapped: &[ScenarioKind] = match cli.command {
                Commands::Contact => &[ScenarioKind::Contact],
                Commands::Events => &[ScenarioKind::Events],
                Commands::Registrations => &[ScenarioKind::Registrations],
                Commands::Subscribers => &[ScenarioKind::Subscribers],
                _ => &[],
            };
            assert_eq!(mapped, &[kind]);
        }
    }
}
