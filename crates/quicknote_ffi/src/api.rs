//! FFI use-case API for the mobile-shell-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level note store functions to Dart via FRB.
//! - Keep error semantics simple for UI integration: envelopes, not throws.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - All store access goes through one process-global instance behind a
//!   mutex; the core itself stays free of global state.
//! - Unknown category labels and malformed ids become failure envelopes.

use quicknote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    preview_text, Category, Note, NoteId, NoteStore, PREVIEW_WORD_COUNT,
    LATEST_NOTES_DEFAULT_LIMIT,
};
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

const LATEST_LIMIT_MAX: u32 = 10;

static STORE: OnceLock<Mutex<NoteStore>> = OnceLock::new();

fn with_store<T>(operation: impl FnOnce(&mut NoteStore) -> T) -> T {
    let store = STORE.get_or_init(|| Mutex::new(NoteStore::new()));
    // A poisoning panic cannot leave the store half-mutated (mutations
    // validate before writing), so recovering the inner value is safe.
    let mut guard = match store.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::warn!("event=store_lock_poisoned module=ffi status=recovered");
            poisoned.into_inner()
        }
    };
    operation(&mut guard)
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Note payload returned by list and detail calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    /// Stable note ID in string form.
    pub id: String,
    /// Full note body.
    pub content: String,
    /// Word-bounded plain-text preview for list cards.
    pub preview: String,
    /// Category display label.
    pub category: String,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
    /// Last update time in epoch milliseconds.
    pub updated_at: i64,
}

impl NoteItem {
    fn from_note(note: &Note) -> Self {
        Self {
            id: note.id.to_string(),
            content: note.content.clone(),
            preview: preview_text(&note.content, PREVIEW_WORD_COUNT),
            category: note.category.label().to_string(),
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// Generic action response envelope for mutation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected note ID, when one exists.
    pub note_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>, note_id: Option<String>) -> Self {
        Self {
            ok: true,
            note_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note_id: None,
            message: message.into(),
        }
    }
}

/// List response envelope for category-scoped queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListResponse {
    /// Matching notes (empty on failure).
    pub items: Vec<NoteItem>,
    /// Whether the query was accepted.
    pub ok: bool,
    /// Human-readable response message for diagnostics.
    pub message: String,
    /// Effective applied result limit, when the call takes one.
    pub applied_limit: Option<u32>,
}

/// Count response envelope for the per-category summary view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCountResponse {
    /// Whether the query was accepted.
    pub ok: bool,
    /// Number of notes in the category (0 on failure).
    pub count: u64,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Creates a note in the given category.
///
/// # FFI contract
/// - Sync call against the in-memory store.
/// - Never panics; validation failures return `ok=false` envelopes.
#[flutter_rust_bridge::frb(sync)]
pub fn add_note(content: String, category: String) -> NoteActionResponse {
    let Some(category) = Category::parse_label(&category) else {
        return NoteActionResponse::failure(format!("unknown category: `{category}`"));
    };

    with_store(|store| match store.add_note(content, category) {
        Ok(note) => NoteActionResponse::success("note added", Some(note.id.to_string())),
        Err(err) => NoteActionResponse::failure(err.to_string()),
    })
}

/// Replaces the content of an existing note.
///
/// # FFI contract
/// - Sync call; unknown ids and invalid content return `ok=false` envelopes.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn update_note_content(note_id: String, content: String) -> NoteActionResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteActionResponse::failure(message),
    };

    with_store(|store| match store.update_content(id, content) {
        Ok(()) => NoteActionResponse::success("note updated", Some(note_id.clone())),
        Err(err) => NoteActionResponse::failure(err.to_string()),
    })
}

/// Deletes one note by ID. Deleting an absent note still reports success.
///
/// # FFI contract
/// - Sync call, idempotent.
/// - Never panics; only a malformed ID yields `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_note(note_id: String) -> NoteActionResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteActionResponse::failure(message),
    };

    with_store(|store| {
        store.delete_note(id);
        NoteActionResponse::success("note deleted", Some(note_id.clone()))
    })
}

/// Deletes every note across all categories.
///
/// # FFI contract
/// - Sync call, unconditional, never fails.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_all_notes() -> NoteActionResponse {
    with_store(|store| {
        store.delete_all_notes();
        NoteActionResponse::success("all notes deleted", None)
    })
}

/// Lists all notes in a category, in insertion order.
///
/// # FFI contract
/// - Sync call, read-only.
/// - Unknown category labels return an empty `ok=false` envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_by_category(category: String) -> NoteListResponse {
    let Some(parsed) = Category::parse_label(&category) else {
        return NoteListResponse {
            items: Vec::new(),
            ok: false,
            message: format!("unknown category: `{category}`"),
            applied_limit: None,
        };
    };

    with_store(|store| {
        let items = store
            .notes_by_category(parsed)
            .iter()
            .map(NoteItem::from_note)
            .collect();
        NoteListResponse {
            items,
            ok: true,
            message: "ok".to_string(),
            applied_limit: None,
        }
    })
}

/// Lists the most recent notes in a category, newest first.
///
/// Input semantics:
/// - `limit = None` applies the default of 3; values above 10 clamp to 10;
///   `limit = Some(0)` returns an empty list.
///
/// # FFI contract
/// - Sync call, read-only, deterministic envelope with applied limit.
#[flutter_rust_bridge::frb(sync)]
pub fn latest_notes_by_category(category: String, limit: Option<u32>) -> NoteListResponse {
    let applied_limit = normalize_latest_limit(limit);
    let Some(parsed) = Category::parse_label(&category) else {
        return NoteListResponse {
            items: Vec::new(),
            ok: false,
            message: format!("unknown category: `{category}`"),
            applied_limit: Some(applied_limit),
        };
    };

    with_store(|store| {
        let items = store
            .latest_notes_by_category(parsed, applied_limit as usize)
            .iter()
            .map(NoteItem::from_note)
            .collect();
        NoteListResponse {
            items,
            ok: true,
            message: "ok".to_string(),
            applied_limit: Some(applied_limit),
        }
    })
}

/// Returns the number of notes in a category.
///
/// # FFI contract
/// - Sync call, read-only.
/// - Unknown category labels return `ok=false` with a zero count.
#[flutter_rust_bridge::frb(sync)]
pub fn note_count_by_category(category: String) -> NoteCountResponse {
    let Some(parsed) = Category::parse_label(&category) else {
        return NoteCountResponse {
            ok: false,
            count: 0,
            message: format!("unknown category: `{category}`"),
        };
    };

    with_store(|store| NoteCountResponse {
        ok: true,
        count: store.note_count_by_category(parsed) as u64,
        message: "ok".to_string(),
    })
}

/// Returns the fixed category labels in declared order.
///
/// # FFI contract
/// - Sync call, constant output regardless of store contents.
#[flutter_rust_bridge::frb(sync)]
pub fn all_category_labels() -> Vec<String> {
    Category::ALL
        .iter()
        .map(|category| category.label().to_string())
        .collect()
}

fn parse_note_id(value: &str) -> Result<NoteId, String> {
    Uuid::parse_str(value).map_err(|_| format!("invalid note id: `{value}`"))
}

fn normalize_latest_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(value) if value > LATEST_LIMIT_MAX => LATEST_LIMIT_MAX,
        Some(value) => value,
        None => LATEST_NOTES_DEFAULT_LIMIT as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        add_note, all_category_labels, delete_all_notes, delete_note, latest_notes_by_category,
        normalize_latest_limit, note_count_by_category, notes_by_category, parse_note_id, ping,
        update_note_content,
    };

    #[test]
    fn ping_round_trips() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn category_labels_are_fixed_and_ordered() {
        assert_eq!(
            all_category_labels(),
            vec!["Work and Study", "Life", "Health and Well-being"]
        );
    }

    #[test]
    fn normalize_latest_limit_applies_default_and_max() {
        assert_eq!(normalize_latest_limit(None), 3);
        assert_eq!(normalize_latest_limit(Some(0)), 0);
        assert_eq!(normalize_latest_limit(Some(7)), 7);
        assert_eq!(normalize_latest_limit(Some(99)), 10);
    }

    #[test]
    fn parse_note_id_rejects_malformed_input() {
        assert!(parse_note_id("not-a-uuid").is_err());
        assert!(parse_note_id("11111111-2222-4333-8444-555555555555").is_ok());
    }

    #[test]
    fn unknown_category_yields_failure_envelopes() {
        let added = add_note("x".to_string(), "Chores".to_string());
        assert!(!added.ok);
        assert!(added.message.contains("unknown category"));

        let listed = notes_by_category("Chores".to_string());
        assert!(!listed.ok);
        assert!(listed.items.is_empty());

        let counted = note_count_by_category("Chores".to_string());
        assert!(!counted.ok);
        assert_eq!(counted.count, 0);
    }

    // One sequential flow; the store behind the API is process-global, so
    // splitting this into parallel test fns would race on shared counts.
    #[test]
    fn store_flow_through_ffi_envelopes() {
        delete_all_notes();

        let added = add_note("Fix bug".to_string(), "Work and Study".to_string());
        assert!(added.ok, "unexpected failure: {}", added.message);
        let note_id = added.note_id.expect("created note should carry an id");

        let rejected = add_note("a".repeat(201), "Life".to_string());
        assert!(!rejected.ok);
        assert!(rejected.message.contains("200"));

        let updated = update_note_content(note_id.clone(), "Fix bug properly".to_string());
        assert!(updated.ok, "unexpected failure: {}", updated.message);

        let listed = notes_by_category("Work and Study".to_string());
        assert_eq!(listed.items.len(), 1);
        assert_eq!(listed.items[0].content, "Fix bug properly");

        let latest = latest_notes_by_category("Work and Study".to_string(), None);
        assert_eq!(latest.applied_limit, Some(3));
        assert_eq!(latest.items.len(), 1);

        let deleted = delete_note(note_id.clone());
        assert!(deleted.ok);
        // Idempotent: deleting again still succeeds.
        assert!(delete_note(note_id).ok);

        let counted = note_count_by_category("Work and Study".to_string());
        assert!(counted.ok);
        assert_eq!(counted.count, 0);

        assert!(delete_all_notes().ok);
    }
}
