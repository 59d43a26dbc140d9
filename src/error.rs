//! Error types for the sync daemon.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for all sync operations.
pub enum Error {
    /// Underlying HTTP client error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Task store returned a non-success status with body.
    #[error("unexpected status {status}: {body}")]
    Api { status: StatusCode, body: String },
    /// Response body or URL could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
    /// HTML body could not be rendered to text.
    #[error("render error: {0}")]
    Render(#[from] html2text::Error),
    /// Credentials are malformed or rejected.
    #[error("authentication error: {0}")]
    Auth(String),
    /// Required configuration is missing or invalid.
    #[error("config error: {0}")]
    Config(String),
}

/// Result type for sync operations.
pub type Result<T> = std::result::Result<T, Error>;
