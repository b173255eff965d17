//! What a resolution hands to the presentation layer.

use crate::entry::Entry;
use crate::resolver::Mode;

pub const MSG_NOT_FOUND: &str = "No entry found with that name or id.";
pub const MSG_TRY_AGAIN: &str = "Something went wrong. Try again.";
pub const MSG_CATEGORIES_UNAVAILABLE: &str =
    "Could not load categories. You can still search by name or id.";

/// Status line of a render cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading,
    Ready,
    /// Expected outcome worth telling the user about (e.g. no match)
    Info(String),
    Error(String),
}

impl Status {
    pub fn message(&self) -> Option<&str> {
        match self {
            Status::Loading => Some("Loading…"),
            Status::Ready => None,
            Status::Info(msg) | Status::Error(msg) => Some(msg),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }
}

/// What happens to the result area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Replace the results with these entries (possibly none)
    Replace(Vec<Entry>),
    /// Keep whatever was painted before
    Unchanged,
}

/// One finished render cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    /// Sequence number of the resolution that produced this result
    pub generation: u64,
    pub mode: Mode,
    pub content: Content,
    pub total: usize,
    pub page: usize,
    pub max_page: usize,
    pub pager_visible: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub status: Status,
}

impl RenderResult {
    /// Entries to paint, or `None` when the previous ones stay
    pub fn entries(&self) -> Option<&[Entry]> {
        match &self.content {
            Content::Replace(entries) => Some(entries),
            Content::Unchanged => None,
        }
    }

    pub fn page_label(&self) -> String {
        format!("Page {} / {}", self.page, self.max_page)
    }
}
