use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a GitHub API call, split by the stage that failed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid github username: {0:?}")]
    InvalidUsername(String),
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}
