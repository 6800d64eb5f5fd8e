//! EvHub API smoke-test harness
//!
//! This crate drives scripted CRUD sequences against a running EvHub REST
//! API and reports the outcome of every step:
//! - A typed [`client::ApiClient`] wraps the HTTP surface (contact form,
//!   events, registrations, subscribers)
//! - Four scenario groups exercise one resource each, including the
//!   deliberate-rejection paths (invalid contact form, duplicate
//!   subscriber email)
//! - [`runner::SuiteRunner`] executes scenarios strictly sequentially and
//!   aggregates a [`scenario::SuiteReport`]
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   SuiteRunner                            │
//! │    ├── run_all() -> SuiteReport                          │
//! │    └── run_scenario(kind) -> ScenarioReport              │
//! ├──────────────────────────────────────────────────────────┤
//! │  ScenarioKind registry                                   │
//! │    ├── contact        valid submit + rejected submit     │
//! │    ├── events         create/list/get/update/delete      │
//! │    ├── registrations  create + list + filter by event    │
//! │    └── subscribers    create/list/duplicate/opt-out      │
//! ├──────────────────────────────────────────────────────────┤
//! │  ApiClient (reqwest)                                     │
//! │    └── one typed method per endpoint, JSON in/out        │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod runner;
pub mod scenario;
pub mod scenarios;

pub use client::ApiClient;
pub use config::HarnessConfig;
pub use error::{SmokeError, SmokeResult};
pub use runner::SuiteRunner;
pub use scenario::{ScenarioKind, ScenarioReport, SuiteReport};
