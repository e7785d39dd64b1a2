//! Home-screen notes list
//!
//! The whole list is one JSON blob under the `notes` storage key,
//! written back after every mutation (same whole-blob policy as the
//! tally maps).

use std::sync::Arc;

use conta_domain::Note;

use crate::error::NotesError;
use crate::storage::{self, KeyValueStore};

/// Storage key for the serialized note list.
pub const NOTES_KEY: &str = "notes";

/// Persisted notes list.
pub struct NoteStore {
    store: Arc<dyn KeyValueStore>,
    notes: Vec<Note>,
}

impl NoteStore {
    /// Load the note list. Missing or corrupt blobs load as empty.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let notes = storage::read_json_or_default(store.as_ref(), NOTES_KEY);
        Self { store, notes }
    }

    /// All notes, in insertion order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    /// Append a new note. Blank text is rejected.
    pub fn add(&mut self, text: &str) -> Result<Note, NotesError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(NotesError::Empty);
        }
        let note = Note::new(text);
        self.notes.push(note.clone());
        self.persist();
        Ok(note)
    }

    /// Replace a note's text. Blank text is rejected.
    pub fn edit(&mut self, id: &str, text: &str) -> Result<(), NotesError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(NotesError::Empty);
        }
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NotesError::NotFound(id.to_string()))?;
        note.text = text.to_string();
        self.persist();
        Ok(())
    }

    /// Flip a note's completion flag. Returns false if the id is unknown.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.toggle();
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Delete a note. Returns false if the id is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        let removed = self.notes.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Delete every note.
    pub fn clear(&mut self) {
        self.notes.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = storage::write_json(self.store.as_ref(), NOTES_KEY, &self.notes) {
            tracing::warn!("Failed to persist {}: {}", NOTES_KEY, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn fresh_pair() -> (Arc<MemoryStore>, NoteStore) {
        let store = Arc::new(MemoryStore::new());
        let notes = NoteStore::load(store.clone());
        (store, notes)
    }

    #[test]
    fn add_list_round_trip() {
        let (store, mut notes) = fresh_pair();
        let added = notes.add("pedir más clips").unwrap();
        assert_eq!(notes.list().len(), 1);

        // Reload over the same substrate: the note survives.
        let reloaded = NoteStore::load(store);
        assert_eq!(reloaded.list(), &[added]);
    }

    #[test]
    fn blank_note_is_rejected() {
        let (_, mut notes) = fresh_pair();
        assert!(matches!(notes.add("   "), Err(NotesError::Empty)));
        assert!(notes.list().is_empty());
    }

    #[test]
    fn edit_replaces_text() {
        let (_, mut notes) = fresh_pair();
        let note = notes.add("revisar linea 2").unwrap();
        notes.edit(&note.id, "revisar linea 3").unwrap();
        assert_eq!(notes.list()[0].text, "revisar linea 3");

        assert!(matches!(
            notes.edit("missing-id", "x"),
            Err(NotesError::NotFound(_))
        ));
        assert!(matches!(notes.edit(&note.id, ""), Err(NotesError::Empty)));
    }

    #[test]
    fn toggle_and_remove() {
        let (_, mut notes) = fresh_pair();
        let note = notes.add("cambiar turno").unwrap();

        assert!(notes.toggle(&note.id));
        assert!(notes.list()[0].completed);
        assert!(!notes.toggle("missing-id"));

        assert!(notes.remove(&note.id));
        assert!(notes.list().is_empty());
        assert!(!notes.remove(&note.id));
    }

    #[test]
    fn corrupt_blob_loads_as_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(NOTES_KEY, "oops").unwrap();
        let notes = NoteStore::load(store);
        assert!(notes.list().is_empty());
    }
}
