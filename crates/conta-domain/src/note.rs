//! Note (home-screen to-do item) model

use serde::{Deserialize, Serialize};

/// A free-text note with a completion flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Note {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl Note {
    /// Create a new note with a fresh id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
        }
    }

    /// Flip the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
