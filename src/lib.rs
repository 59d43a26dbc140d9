pub mod client;
pub mod config;
pub mod constants;
pub mod convert;
pub mod download;
pub mod error;
pub mod models;
pub mod store;
pub mod sync;

pub use client::TodoistClient;
pub use config::Config;
pub use constants::{default_headers, API_BASE_URL, DEFAULT_TASK_FILTER};
pub use convert::html_to_text;
pub use download::{AttachmentSource, CookieFetcher};
pub use error::{Error, Result};
pub use models::{Attachment, Comment, Page, Task};
pub use store::TaskStore;
pub use sync::{process_task, run, run_cycle, CycleSummary, TaskOutcome};
