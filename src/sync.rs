//! The poll loop: decide, download, convert, write back.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::convert;
use crate::download::AttachmentSource;
use crate::error::{Error, Result};
use crate::models::{Attachment, Task};
use crate::store::TaskStore;

/// What happened to a single task during one cycle.
#[derive(Debug)]
pub enum TaskOutcome {
    /// Description written from the attachment body.
    Updated,
    /// Task already carries a description; left untouched.
    AlreadyDescribed,
    /// No comments, or the first comment has no attachment.
    NoAttachment,
    /// Download refused or returned nothing; retried next cycle.
    FetchFailed,
    /// Comment listing, rendering, or the update call failed.
    Failed(Error),
}

/// Counts for one full pass over the task snapshot.
#[derive(Debug, Default)]
pub struct CycleSummary {
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl CycleSummary {
    fn record(&mut self, outcome: &TaskOutcome) {
        match outcome {
            TaskOutcome::Updated => self.updated += 1,
            TaskOutcome::AlreadyDescribed | TaskOutcome::NoAttachment => self.skipped += 1,
            TaskOutcome::FetchFailed | TaskOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// First attachment of the task, if it has one.
///
/// Only the first comment of the first page matters: a task created from an
/// inbound email carries the email itself as its first comment. An empty
/// page or a comment without an attachment is not an error.
async fn first_attachment<S: TaskStore>(store: &S, task_id: &str) -> Result<Option<Attachment>> {
    let page = store.task_comments(task_id, None).await?;
    Ok(page
        .results
        .into_iter()
        .next()
        .and_then(|comment| comment.attachment))
}

/// Run one task through the decision pipeline.
///
/// Never propagates: every failure becomes an outcome so the cycle can move
/// on to the next task. A task skipped on failure still lacks a
/// description, so the next cycle's fresh query picks it up again.
pub async fn process_task<S, A>(store: &S, attachments: &A, task: &Task) -> TaskOutcome
where
    S: TaskStore,
    A: AttachmentSource,
{
    if !task.description.is_empty() {
        debug!("task {} already has a description, skipping", task.id);
        return TaskOutcome::AlreadyDescribed;
    }

    let attachment = match first_attachment(store, &task.id).await {
        Ok(Some(attachment)) => attachment,
        Ok(None) => {
            debug!("task {} has no attachment, skipping", task.id);
            return TaskOutcome::NoAttachment;
        }
        Err(e) => {
            warn!("failed to list comments for task {}: {e}", task.id);
            return TaskOutcome::Failed(e);
        }
    };

    let bytes = match attachments.fetch(&attachment.file_url).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return TaskOutcome::FetchFailed,
        Err(e) => {
            warn!("failed to download attachment {}: {e}", attachment.file_url);
            return TaskOutcome::FetchFailed;
        }
    };

    // Lenient decode: a stray undecodable byte must not fail the task.
    let html = String::from_utf8_lossy(&bytes);
    let description = match convert::html_to_text(&html) {
        Ok(text) => text,
        Err(e) => {
            warn!("failed to render attachment {}: {e}", attachment.file_url);
            return TaskOutcome::Failed(e);
        }
    };

    match store.update_description(&task.id, &description).await {
        Ok(()) => {
            info!("updated task {} from attachment {}", task.id, attachment.file_url);
            TaskOutcome::Updated
        }
        Err(e) => {
            error!("failed to update task {}: {e}", task.id);
            TaskOutcome::Failed(e)
        }
    }
}

/// One full pass over the current task snapshot.
///
/// Pages are fetched lazily and never retained across cycles. Only a
/// listing failure aborts the pass; the caller logs it and retries after
/// the normal sleep.
pub async fn run_cycle<S, A>(store: &S, attachments: &A, query: &str) -> Result<CycleSummary>
where
    S: TaskStore,
    A: AttachmentSource,
{
    let mut summary = CycleSummary::default();
    let mut cursor: Option<String> = None;

    loop {
        let page = store.filter_tasks(query, cursor.as_deref()).await?;
        for task in &page.results {
            debug!("processing task {}: {}", task.id, task.content);
            summary.record(&process_task(store, attachments, task).await);
        }
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(summary)
}

/// Poll forever: one cycle, a fixed sleep, repeat.
///
/// A fresh query is issued every cycle, nothing is cached in between.
/// Runs until the process is stopped.
pub async fn run<S, A>(store: &S, attachments: &A, query: &str, interval: Duration)
where
    S: TaskStore,
    A: AttachmentSource,
{
    loop {
        match run_cycle(store, attachments, query).await {
            Ok(summary) => info!(
                "cycle complete: {} updated, {} skipped, {} failed",
                summary.updated, summary.skipped, summary.failed
            ),
            Err(e) => error!("task listing failed: {e}"),
        }
        tokio::time::sleep(interval).await;
    }
}
