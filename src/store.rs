//! Task store abstraction.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Comment, Page, Task};

/// Abstraction over the task store operations the sync loop needs.
///
/// The poll loop programs against this trait. `TodoistClient` wraps the
/// REST API; tests substitute an in-memory implementation.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// List tasks matching a relative-date filter query, one page at a
    /// time. Passing the previous page's cursor fetches the next page;
    /// `None` starts a fresh listing.
    async fn filter_tasks(&self, query: &str, cursor: Option<&str>) -> Result<Page<Task>>;

    /// List comments for a task in creation order, one page at a time.
    async fn task_comments(&self, task_id: &str, cursor: Option<&str>) -> Result<Page<Comment>>;

    /// Overwrite a task's description.
    async fn update_description(&self, task_id: &str, description: &str) -> Result<()>;
}
