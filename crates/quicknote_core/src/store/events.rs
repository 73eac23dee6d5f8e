//! Store change notification.
//!
//! # Responsibility
//! - Define the event vocabulary emitted after successful mutations.
//! - Provide the listener registry the store dispatches through.
//!
//! # Invariants
//! - Events are emitted only after a mutation has fully taken effect.
//! - Unsubscribing is idempotent; stale ids are ignored.

use crate::model::note::NoteId;

/// Change event emitted by the store after a successful mutation.
///
/// Carries ids only; subscribers re-query the store for current data. This
/// keeps events cheap and avoids handing out stale note snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A note was created and appended to the collection.
    NoteAdded { id: NoteId },
    /// An existing note's content was replaced.
    NoteUpdated { id: NoteId },
    /// A note was removed. Not emitted for delete of an absent id.
    NoteDeleted { id: NoteId },
    /// The whole collection was emptied. Always emitted by delete-all.
    StoreCleared,
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Listener callback invoked synchronously on the mutating call path.
///
/// `Send` so a store behind a mutex can cross thread boundaries (the FFI
/// crate keeps one process-global store).
pub type StoreListener = Box<dyn Fn(&StoreEvent) + Send>;

/// Ordered listener registry.
///
/// Dispatch order is subscription order; listeners are few (screen-level
/// subscribers), so a linear scan on unsubscribe is fine.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    listeners: Vec<(SubscriptionId, StoreListener)>,
    next_id: u64,
}

impl ListenerRegistry {
    pub(crate) fn subscribe(&mut self, listener: StoreListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(current, _)| *current != id);
    }

    pub(crate) fn emit(&self, event: &StoreEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}
