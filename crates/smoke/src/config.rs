//! Harness configuration

use std::path::PathBuf;
use std::time::Duration;

/// Default API root, matching a local development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Configuration for a smoke-test run.
///
/// The base URL is explicit constructor input rather than a module-level
/// constant, so the same binary can target any deployment.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// API root the resource paths are joined onto (no trailing slash
    /// required; one is stripped if present).
    pub base_url: String,

    /// Per-request timeout applied to the underlying HTTP client. A hung
    /// request fails its step instead of stalling the scenario forever.
    pub timeout: Duration,

    /// Directory to write the JSON suite report into (None = don't write).
    pub output_dir: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            output_dir: None,
        }
    }
}

impl HarnessConfig {
    /// Base URL with any trailing slashes removed, so endpoint paths can be
    /// appended deterministically.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
