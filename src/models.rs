//! Data models returned by the task store.

use serde::{Deserialize, Serialize};

/// A task tracked by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier.
    pub id: String,
    /// Task title text.
    pub content: String,
    /// Task description; the store returns an empty string when unset.
    #[serde(default)]
    pub description: String,
    /// Creation timestamp as provided by the store.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A comment on a task, in creation order.
///
/// The first comment of a task created from an inbound email is the email
/// itself, attached as HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier.
    pub id: String,
    /// Comment body text.
    #[serde(default)]
    pub content: String,
    /// Posting timestamp as provided by the store.
    #[serde(default)]
    pub posted_at: Option<String>,
    /// Attachment reference, present when the comment carries a file.
    #[serde(default, rename = "file_attachment")]
    pub attachment: Option<Attachment>,
}

/// Attachment metadata from a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Absolute URL to download the attachment.
    pub file_url: String,
    /// Attachment display name if available.
    #[serde(default)]
    pub file_name: Option<String>,
    /// MIME type reported by the store.
    #[serde(default)]
    pub file_type: Option<String>,
    /// Store resource type ("file", "image", ...).
    #[serde(default)]
    pub resource_type: Option<String>,
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in this page.
    pub results: Vec<T>,
    /// Cursor for the next page; `None` on the last page.
    #[serde(default)]
    pub next_cursor: Option<String>,
}
