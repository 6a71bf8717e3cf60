//! Assist call errors

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between sending a task and reading its text
///
/// Callers treat every variant the same way; the split exists for logging.
#[derive(Debug, Error)]
pub enum AssistError {
    /// Connection, TLS, timeout, or body read failure
    #[error("request to generative endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("generative endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The body was not the JSON shape we expect
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The configured base URL could not be turned into an endpoint
    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    /// The background task went away before reporting a result
    #[error("assist task ended without a result")]
    Interrupted,
}
