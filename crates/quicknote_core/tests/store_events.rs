use quicknote_core::{Category, NoteStore, StoreEvent};
use std::sync::{Arc, Mutex};

fn recording_store() -> (NoteStore, Arc<Mutex<Vec<StoreEvent>>>) {
    let mut store = NoteStore::new();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&recorded);
    store.subscribe(Box::new(move |event| {
        sink.lock().expect("event sink lock").push(*event);
    }));
    (store, recorded)
}

fn drain(recorded: &Arc<Mutex<Vec<StoreEvent>>>) -> Vec<StoreEvent> {
    std::mem::take(&mut *recorded.lock().expect("event sink lock"))
}

#[test]
fn successful_mutations_emit_events_in_order() {
    let (mut store, recorded) = recording_store();

    let note = store.add_note("walk", Category::HealthAndWellBeing).unwrap();
    store.update_content(note.id, "walk 5km").unwrap();
    store.delete_note(note.id);
    store.delete_all_notes();

    assert_eq!(
        drain(&recorded),
        vec![
            StoreEvent::NoteAdded { id: note.id },
            StoreEvent::NoteUpdated { id: note.id },
            StoreEvent::NoteDeleted { id: note.id },
            StoreEvent::StoreCleared,
        ]
    );
}

#[test]
fn failed_mutations_emit_nothing() {
    let (mut store, recorded) = recording_store();

    store.add_note("", Category::Life).unwrap_err();
    store.add_note("a".repeat(201), Category::Life).unwrap_err();
    store
        .update_content(uuid::Uuid::new_v4(), "x")
        .unwrap_err();

    assert!(drain(&recorded).is_empty());
}

#[test]
fn delete_of_absent_id_emits_nothing() {
    let (mut store, recorded) = recording_store();

    store.delete_note(uuid::Uuid::new_v4());

    assert!(drain(&recorded).is_empty());
}

#[test]
fn delete_all_on_empty_store_still_signals_reset() {
    let (mut store, recorded) = recording_store();

    store.delete_all_notes();

    assert_eq!(drain(&recorded), vec![StoreEvent::StoreCleared]);
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let mut store = NoteStore::new();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&recorded);
    let subscription = store.subscribe(Box::new(move |event| {
        sink.lock().expect("event sink lock").push(*event);
    }));

    store.add_note("before", Category::Life).unwrap();
    store.unsubscribe(subscription);
    store.add_note("after", Category::Life).unwrap();

    let events = recorded.lock().expect("event sink lock");
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], StoreEvent::NoteAdded { .. }));
}

#[test]
fn multiple_subscribers_all_receive_events() {
    let mut store = NoteStore::new();
    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));

    for sink in [Arc::clone(&first), Arc::clone(&second)] {
        store.subscribe(Box::new(move |event| {
            sink.lock().expect("event sink lock").push(*event);
        }));
    }

    store.add_note("shared", Category::WorkAndStudy).unwrap();

    assert_eq!(first.lock().unwrap().len(), 1);
    assert_eq!(second.lock().unwrap().len(), 1);
}
