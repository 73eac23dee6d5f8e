//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record owned by the store.
//! - Provide the single content-validation path used by every mutation.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `content` holds between 1 and 200 characters at all times.
//! - `updated_at >= created_at` at all times.

use crate::model::category::Category;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Maximum note content length, counted in Unicode scalar values.
pub const MAX_CONTENT_CHARS: usize = 200;

/// Default word count for list-card previews.
pub const PREVIEW_WORD_COUNT: usize = 20;

/// Validation error for note content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Content is empty.
    EmptyContent,
    /// Content exceeds [`MAX_CONTENT_CHARS`] characters.
    ContentTooLong {
        /// Observed character count.
        length: usize,
    },
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "note content cannot be empty"),
            Self::ContentTooLong { length } => write!(
                f,
                "note content cannot exceed {MAX_CONTENT_CHARS} characters (got {length})"
            ),
        }
    }
}

impl Error for NoteValidationError {}

/// Validates note content against the length bound.
///
/// This is the only validation path for content; both creation and update go
/// through it so the two cannot drift apart.
pub fn validate_content(content: &str) -> Result<(), NoteValidationError> {
    let length = content.chars().count();
    if length == 0 {
        return Err(NoteValidationError::EmptyContent);
    }
    if length > MAX_CONTENT_CHARS {
        return Err(NoteValidationError::ContentTooLong { length });
    }
    Ok(())
}

/// Canonical note record.
///
/// Timestamps are epoch milliseconds; the store stamps them from its injected
/// clock so the model itself stays clock-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for updates, deletion and list keys.
    pub id: NoteId,
    /// Plain text body, 1..=200 characters.
    pub content: String,
    /// Fixed category this note is filed under.
    pub category: Category,
    /// Creation time in epoch milliseconds. Set once, never modified.
    pub created_at: i64,
    /// Last content-update time in epoch milliseconds. `>= created_at`.
    pub updated_at: i64,
}

impl Note {
    /// Creates a note with a generated stable ID and equal timestamps.
    ///
    /// Content must already be validated by the caller; the store is the only
    /// construction site and always validates first.
    pub(crate) fn new(content: String, category: Category, now_epoch_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            category,
            created_at: now_epoch_ms,
            updated_at: now_epoch_ms,
        }
    }
}

/// Derives a short plain-text preview from note content.
///
/// Keeps the first `word_count` whitespace-separated words and appends `...`
/// when anything was cut. Content short enough is returned verbatim.
pub fn preview_text(content: &str, word_count: usize) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    if words.len() <= word_count {
        return content.to_string();
    }
    let mut preview = words[..word_count].join(" ");
    preview.push_str("...");
    preview
}
