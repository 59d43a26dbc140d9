//! Async HTTP client for the Todoist unified API.

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::constants::default_headers;
use crate::error::{Error, Result};
use crate::models::{Comment, Page, Task};
use crate::store::TaskStore;

/// Client for the task store REST API.
///
/// Holds one pooled connection set for the listing/comment/update calls;
/// attachment downloads go through `CookieFetcher` instead, which scopes a
/// session per fetch.
pub struct TodoistClient {
    base_url: String,
    client: Client,
}

impl TodoistClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = default_headers();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
            .map_err(|_| Error::Auth("API token contains characters not valid in a header".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let resp = self.client.get(&url).query(params).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(Error::Api { status, body });
        }
        serde_json::from_str(&body).map_err(|e| Error::Parse(format!("{path}: {e}")))
    }
}

#[async_trait]
impl TaskStore for TodoistClient {
    async fn filter_tasks(&self, query: &str, cursor: Option<&str>) -> Result<Page<Task>> {
        let mut params = vec![("query", query)];
        if let Some(cursor) = cursor {
            params.push(("cursor", cursor));
        }
        self.get_json("/tasks/filter", &params).await
    }

    async fn task_comments(&self, task_id: &str, cursor: Option<&str>) -> Result<Page<Comment>> {
        let mut params = vec![("task_id", task_id)];
        if let Some(cursor) = cursor {
            params.push(("cursor", cursor));
        }
        self.get_json("/comments", &params).await
    }

    async fn update_description(&self, task_id: &str, description: &str) -> Result<()> {
        let url = format!("{}/tasks/{task_id}", self.base_url);
        let body = serde_json::json!({ "description": description });
        let resp = self.client.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }
        Ok(())
    }
}
