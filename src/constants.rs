use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

pub const API_BASE_URL: &str = "https://api.todoist.com/api/v1";
pub const DOWNLOAD_COOKIE_NAME: &str = "todoistd";
pub const DEFAULT_TASK_FILTER: &str = "created after: -30 days";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Render width for HTML conversion. Wide enough that email paragraphs
/// keep their original line lengths.
pub const RENDER_WIDTH: usize = 10_000;

pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (k, v) in DEFAULT_HEADERS {
        let name = HeaderName::from_static(k);
        if let Ok(val) = HeaderValue::from_str(v) {
            headers.insert(name, val);
        }
    }
    headers
}

pub const DEFAULT_HEADERS: &[(&str, &str)] = &[
    ("user-agent", "todoist-mail-sync/0.1"),
    ("accept", "*/*"),
];
