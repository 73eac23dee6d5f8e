//! Domain model for the note-taking core.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Own the single content-validation path shared by all mutations.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - The category set is closed; invalid categories are unrepresentable.

pub mod category;
pub mod note;
