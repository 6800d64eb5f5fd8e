//! Error types for the smoke harness

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    /// The API refused a request and returned a JSON error payload.
    #[error("API rejected request with {status}: {body}")]
    ApiRejection { status: StatusCode, body: String },

    /// The API answered with a success status other than the one the step
    /// requires (e.g. a DELETE that does not return 204).
    #[error("{context}: expected status {expected}, got {actual}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
        context: String,
    },

    /// A request the API was expected to refuse went through. The
    /// validation rule under test is no longer enforced.
    #[error("validation regression: {0}")]
    Regression(String),

    #[error("assertion failed: {0}")]
    AssertionFailed(String),

    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SmokeError {
    /// Whether this error is the API enforcing a validation rule (HTTP 400),
    /// as opposed to any other failure. Scenario groups use this to tell an
    /// expected rejection from a genuine problem.
    pub fn is_validation_rejection(&self) -> bool {
        matches!(
            self,
            SmokeError::ApiRejection { status, .. } if *status == StatusCode::BAD_REQUEST
        )
    }
}

pub type SmokeResult<T> = Result<T, SmokeError>;
