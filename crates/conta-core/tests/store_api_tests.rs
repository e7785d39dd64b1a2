//! End-to-end tests over the unified store API
//!
//! Drives the same call sequences a shell performs: pick a line, open a
//! reference, count, close, restart.

use conta_core::{ContaStore, Step};

#[test]
fn full_session_against_a_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conta.db").to_string_lossy().to_string();

    {
        let store = ContaStore::open(path.clone()).unwrap();

        // Browse: line -> reference -> bill of materials.
        let line = "COMAS 1".to_string();
        let reference = store.references(line.clone())[0].reference.clone();
        let materials = store.materials_for(line.clone(), reference.clone());
        assert!(!materials.is_empty());

        store.record_recent(line, reference.clone());

        // Count two pieces and set the day's target.
        for material in &materials {
            store.adjust_quantity(
                reference.clone(),
                material.name.clone(),
                Step::Increment,
                material.quantity,
            );
            store.adjust_quantity(
                reference.clone(),
                material.name.clone(),
                Step::Increment,
                material.quantity,
            );
        }
        store.set_target_quantity(reference.clone(), "120".to_string());

        // Closing the counting view.
        store.flush();

        let note = store.add_note("faltan clips en COMAS 1".to_string()).unwrap();
        assert!(store.toggle_note(note.id));
    }

    // Restart: a brand new store over the same file sees everything.
    let store = ContaStore::open(path).unwrap();
    let reference = store.references("COMAS 1".to_string())[0].clone();

    for material in &reference.materials {
        assert_eq!(
            store.quantity(reference.reference.clone(), material.name.clone()),
            u64::from(material.quantity) * 2,
        );
    }
    assert_eq!(store.target_quantity(reference.reference.clone()), "120");

    let recents = store.recent_references();
    assert_eq!(recents.len(), 1);
    assert_eq!(recents[0].reference, reference.reference);

    let notes = store.notes();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].completed);
}

#[test]
fn reset_clears_one_reference_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conta.db").to_string_lossy().to_string();

    {
        let store = ContaStore::open(path.clone()).unwrap();
        store.adjust_quantity("J6276207".into(), "Tornillo M6".into(), Step::Increment, 4);
        store.adjust_quantity("J7103550".into(), "Tornillo M4".into(), Step::Increment, 2);
        store.set_target_quantity("J6276207".into(), "50".into());

        store.reset_reference("J6276207".into());
        // No flush on purpose: reset persists immediately.
    }

    let store = ContaStore::open(path).unwrap();
    assert_eq!(store.quantity("J6276207".into(), "Tornillo M6".into()), 0);
    assert_eq!(store.target_quantity("J6276207".into()), "");
    assert_eq!(store.quantity("J7103550".into(), "Tornillo M4".into()), 2);
}

#[test]
fn flush_is_idempotent() {
    let store = ContaStore::open_in_memory().unwrap();
    store.adjust_quantity("R1".into(), "Bolt".into(), Step::Increment, 5);
    store.flush();
    store.flush();
    assert_eq!(store.quantity("R1".into(), "Bolt".into()), 5);
}

#[test]
fn search_spans_every_line() {
    let store = ContaStore::open_in_memory().unwrap();

    let hits = store.search_references("j".to_string());
    assert!(hits.iter().any(|r| r.line == "COMAS 1"));
    assert!(hits.iter().any(|r| r.line == "COMAS 2"));

    assert!(store.search_references("no-such-ref".to_string()).is_empty());
}
