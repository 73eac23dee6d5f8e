//! Core domain logic for QuickNote.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::category::Category;
pub use model::note::{
    preview_text, validate_content, Note, NoteId, NoteValidationError, MAX_CONTENT_CHARS,
    PREVIEW_WORD_COUNT,
};
pub use store::clock::{Clock, SystemClock};
pub use store::events::{StoreEvent, StoreListener, SubscriptionId};
pub use store::note_store::{NoteStore, StoreError, StoreResult, LATEST_NOTES_DEFAULT_LIMIT};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_answer_is_stable() {
        assert_eq!(ping(), "pong");
        assert_eq!(ping(), ping());
    }

    #[test]
    fn core_version_has_three_numeric_parts() {
        let version = core_version();
        let parts: Vec<&str> = version.split('.').collect();
        assert_eq!(parts.len(), 3, "unexpected version shape: {version}");
        for part in parts {
            part.parse::<u32>()
                .unwrap_or_else(|_| panic!("non-numeric version part `{part}` in {version}"));
        }
    }
}
