//! In-memory note store.
//!
//! # Responsibility
//! - Own the authoritative note collection and every mutation over it.
//! - Enforce the content-length invariant at each mutation boundary.
//! - Notify subscribers after each successful mutation.
//!
//! # Invariants
//! - Mutations validate before writing; a failed call leaves the store
//!   unchanged and emits no event.
//! - The underlying collection keeps insertion order; only query *results*
//!   are re-sorted.
//! - Log events carry ids and counts only, never note content.

use crate::model::category::Category;
use crate::model::note::{validate_content, Note, NoteId, NoteValidationError};
use crate::store::clock::{Clock, SystemClock};
use crate::store::events::{ListenerRegistry, StoreEvent, StoreListener, SubscriptionId};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default result-set size for "latest notes" views.
pub const LATEST_NOTES_DEFAULT_LIMIT: usize = 3;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Content failed the length bound; nothing was written.
    Validation(NoteValidationError),
    /// No note with the given id exists.
    NotFound(NoteId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<NoteValidationError> for StoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Sole owner and mutator of the note collection.
///
/// Single-threaded by design: every operation runs to completion before the
/// next begins, and the hosting shell serializes user-driven calls onto one
/// logical thread of control. Callers needing cross-thread access wrap the
/// store in their own mutex.
pub struct NoteStore {
    notes: Vec<Note>,
    clock: Box<dyn Clock>,
    listeners: ListenerRegistry,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    /// Creates an empty store stamping timestamps from the system clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock::new()))
    }

    /// Creates an empty store with an injected clock.
    ///
    /// The clock must be monotonically non-decreasing; recency ordering
    /// depends on it.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            notes: Vec::new(),
            clock,
            listeners: ListenerRegistry::default(),
        }
    }

    /// Registers a change listener and returns its subscription handle.
    pub fn subscribe(&mut self, listener: StoreListener) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    /// Removes a previously registered listener. Idempotent.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.unsubscribe(id);
    }

    /// Creates a note and appends it to the collection.
    ///
    /// # Errors
    /// - `StoreError::Validation` when `content` is empty or exceeds the
    ///   200-character bound; the store is left unchanged.
    pub fn add_note(&mut self, content: impl Into<String>, category: Category) -> StoreResult<Note> {
        let content = content.into();
        validate_content(&content)?;

        let now = self.clock.now_epoch_ms();
        let note = Note::new(content, category, now);
        self.notes.push(note.clone());

        info!(
            "event=note_added module=store status=ok id={} category={:?} total={}",
            note.id,
            note.category,
            self.notes.len()
        );
        self.listeners.emit(&StoreEvent::NoteAdded { id: note.id });
        Ok(note)
    }

    /// Replaces the content of an existing note and refreshes `updated_at`.
    ///
    /// `created_at` is untouched, so recency ordering of "latest notes" views
    /// does not change on edit.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no note carries `id`.
    /// - `StoreError::Validation` on an out-of-bounds `new_content`.
    ///
    /// Neither failure has a side effect.
    pub fn update_content(&mut self, id: NoteId, new_content: impl Into<String>) -> StoreResult<()> {
        let new_content = new_content.into();
        validate_content(&new_content)?;

        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(StoreError::NotFound(id))?;

        note.content = new_content;
        note.updated_at = self.clock.now_epoch_ms();

        debug!("event=note_updated module=store status=ok id={id}");
        self.listeners.emit(&StoreEvent::NoteUpdated { id });
        Ok(())
    }

    /// Removes the note with `id`, preserving the order of the remainder.
    ///
    /// Deleting an absent id is a no-op, not an error: delete-of-absent is a
    /// harmless race in UI-driven deletion flows.
    pub fn delete_note(&mut self, id: NoteId) {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);

        if self.notes.len() == before {
            debug!("event=note_delete_noop module=store status=ok id={id}");
            return;
        }

        info!(
            "event=note_deleted module=store status=ok id={id} total={}",
            self.notes.len()
        );
        self.listeners.emit(&StoreEvent::NoteDeleted { id });
    }

    /// Empties the collection unconditionally.
    ///
    /// Always emits `StoreCleared`, even when the store was already empty, so
    /// subscribers can use it as a view reset.
    pub fn delete_all_notes(&mut self) {
        let removed = self.notes.len();
        self.notes.clear();

        info!("event=store_cleared module=store status=ok removed={removed}");
        self.listeners.emit(&StoreEvent::StoreCleared);
    }

    /// Returns one note by id.
    pub fn get_note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Returns all notes in `category`, in insertion order.
    pub fn notes_by_category(&self, category: Category) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|note| note.category == category)
            .cloned()
            .collect()
    }

    /// Returns the most recent notes in `category`, newest first.
    ///
    /// Ordered by `created_at` descending; ties broken by insertion order via
    /// an explicit index key rather than relying on sort stability. At most
    /// `limit` entries; `limit == 0` yields an empty result.
    pub fn latest_notes_by_category(&self, category: Category, limit: usize) -> Vec<Note> {
        if limit == 0 {
            return Vec::new();
        }

        let mut matches: Vec<(usize, &Note)> = self
            .notes
            .iter()
            .enumerate()
            .filter(|(_, note)| note.category == category)
            .collect();
        matches.sort_by_key(|(index, note)| (std::cmp::Reverse(note.created_at), *index));
        matches.truncate(limit);
        matches.into_iter().map(|(_, note)| note.clone()).collect()
    }

    /// Returns the number of notes in `category`.
    pub fn note_count_by_category(&self, category: Category) -> usize {
        self.notes
            .iter()
            .filter(|note| note.category == category)
            .count()
    }

    /// Returns the fixed category list in declared order.
    ///
    /// Independent of store contents: a category with no notes is still
    /// present.
    pub fn all_categories(&self) -> [Category; 3] {
        Category::ALL
    }

    /// Returns the total number of notes across all categories.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
