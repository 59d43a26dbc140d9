//! Scoped, cookie-authenticated attachment downloads.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{cookie::Jar, ClientBuilder, StatusCode, Url};
use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::{default_headers, DOWNLOAD_COOKIE_NAME};
use crate::error::{Error, Result};

/// Source of raw attachment bytes.
#[async_trait]
pub trait AttachmentSource: Send + Sync {
    /// Fetch an attachment body. `Ok(None)` means the endpoint refused the
    /// request or returned nothing; the caller skips the task.
    async fn fetch(&self, url: &str) -> Result<Option<Vec<u8>>>;
}

/// Downloads attachments authenticated with the store's session cookie.
///
/// Each fetch builds its own client and cookie jar; the session is dropped
/// on every exit path and nothing is reused across tasks.
pub struct CookieFetcher {
    cookie: String,
    timeout: Duration,
}

impl CookieFetcher {
    pub fn new(config: &Config) -> Self {
        Self {
            cookie: config.download_cookie.clone(),
            timeout: config.timeout,
        }
    }
}

#[async_trait]
impl AttachmentSource for CookieFetcher {
    async fn fetch(&self, url: &str) -> Result<Option<Vec<u8>>> {
        let target: Url = url
            .parse()
            .map_err(|e| Error::Parse(format!("attachment url {url}: {e}")))?;

        let jar = Arc::new(Jar::default());
        jar.add_cookie_str(&format!("{DOWNLOAD_COOKIE_NAME}={}", self.cookie), &target);
        let client = ClientBuilder::new()
            .cookie_provider(jar)
            .timeout(self.timeout)
            .default_headers(default_headers())
            .build()?;

        let resp = client.get(target).send().await?;
        let status = resp.status();
        debug!("downloading attachment from {url}, status {status}");
        if status != StatusCode::OK {
            warn!("failed to download attachment {url}: status {status}");
            return Ok(None);
        }

        let bytes = resp.bytes().await?;
        if bytes.is_empty() {
            warn!("attachment {url} returned an empty body");
            return Ok(None);
        }
        Ok(Some(bytes.to_vec()))
    }
}
