//! Note store and its supporting seams.
//!
//! # Responsibility
//! - Own the in-memory note collection and all mutations over it.
//! - Define the clock seam and the change-notification vocabulary.
//!
//! # Invariants
//! - All mutations validate before writing; failures leave state unchanged.
//! - Change events fire only after a mutation has fully taken effect.

pub mod clock;
pub mod events;
pub mod note_store;
