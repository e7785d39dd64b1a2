//! Local durable key-value storage
//!
//! Everything the app persists on-device — tally maps, target quantities,
//! notes, recent references — is a JSON blob under a fixed string key.
//! The [`KeyValueStore`] trait is the seam between the stores and the
//! on-disk encoding; swapping the substrate never touches call sites.

mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

use crate::error::StorageError;

/// String-keyed blob storage. Values are serialized JSON documents.
pub trait KeyValueStore: Send + Sync {
    /// Get the value for a key. Returns None if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Set a key-value pair, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and deserialize a blob, degrading to `T::default()` on a missing
/// key, an unreadable store, or a corrupt blob. Degradation is logged at
/// WARN and never escapes; the in-memory state is the source of truth.
pub(crate) fn read_json_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match store.get(key) {
        Ok(None) => T::default(),
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                let err = StorageError::CorruptState {
                    key: key.to_string(),
                    message: e.to_string(),
                };
                tracing::warn!("{}; starting empty", err);
                T::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read {}: {}; starting empty", key, e);
            T::default()
        }
    }
}

/// Serialize and write a blob under a key.
pub(crate) fn write_json<T: serde::Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
