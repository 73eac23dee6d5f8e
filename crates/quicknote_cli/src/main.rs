//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quicknote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use quicknote_core::{Category, NoteStore};

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from the mobile/FFI runtime setup.
    println!("quicknote_core ping={}", quicknote_core::ping());
    println!("quicknote_core version={}", quicknote_core::core_version());

    let mut store = NoteStore::new();
    store
        .add_note("Fix bug", Category::WorkAndStudy)
        .expect("smoke note should be valid");
    store
        .add_note("Buy milk", Category::Life)
        .expect("smoke note should be valid");
    store
        .add_note("Fix bug 2", Category::WorkAndStudy)
        .expect("smoke note should be valid");

    for category in store.all_categories() {
        println!(
            "category=\"{category}\" count={}",
            store.note_count_by_category(category)
        );
    }
}
