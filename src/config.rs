//! Process configuration, read once from the environment at startup.

use std::time::Duration;

use crate::constants::{
    API_BASE_URL, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_TASK_FILTER, DEFAULT_TIMEOUT_SECS,
};
use crate::error::{Error, Result};

/// Externally supplied credentials and tuning, immutable for the process
/// lifetime. Handed to the collaborators at construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the task store API.
    pub api_token: String,
    /// Session cookie value for the attachment download endpoint.
    pub download_cookie: String,
    /// Task store base URL.
    pub base_url: String,
    /// Filter query selecting tasks to inspect.
    pub task_filter: String,
    /// Sleep between poll cycles.
    pub poll_interval: Duration,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `TODOIST_API_TOKEN` and `TODOIST_DOWNLOAD_COOKIE` are required;
    /// everything else has a default.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_token: require("TODOIST_API_TOKEN")?,
            download_cookie: require("TODOIST_DOWNLOAD_COOKIE")?,
            base_url: std::env::var("TODOIST_BASE_URL")
                .unwrap_or_else(|_| API_BASE_URL.to_string()),
            task_filter: std::env::var("TODOIST_TASK_FILTER")
                .unwrap_or_else(|_| DEFAULT_TASK_FILTER.to_string()),
            poll_interval: Duration::from_secs(secs_var(
                "TODOIST_POLL_INTERVAL_SECS",
                DEFAULT_POLL_INTERVAL_SECS,
            )?),
            timeout: Duration::from_secs(secs_var(
                "TODOIST_HTTP_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
        })
    }
}

fn require(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{name} is not set"))),
    }
}

fn secs_var(name: &str, default: u64) -> Result<u64> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| Error::Config(format!("{name} is not a number: {value}"))),
        Err(_) => Ok(default),
    }
}
