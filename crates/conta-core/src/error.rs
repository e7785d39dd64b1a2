//! Error types for conta-core

use thiserror::Error;

/// Result type alias for conta operations
pub type Result<T> = std::result::Result<T, ContaError>;

/// Main error type for conta operations
#[derive(Error, Debug)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum ContaError {
    /// Local storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Reference catalog errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Notes errors
    #[error("Note error: {0}")]
    Note(#[from] NotesError),
}

/// Errors from the local key-value storage substrate
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// A stored blob failed to deserialize. Callers recover by starting
    /// from an empty state; this never reaches the user.
    #[error("Corrupt state under key {key}: {message}")]
    CorruptState { key: String, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// Schema version mismatch
    #[error("Schema version mismatch: expected {expected}, got {actual}")]
    SchemaVersionMismatch { expected: u32, actual: u32 },
}

/// Errors from the reference catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Remote request failed
    #[error("Request failed: {0}")]
    Http(String),

    /// Remote endpoint rate limited the client
    #[error("Rate limited")]
    RateLimit,

    /// A catalog document did not match the expected shape
    #[error("Malformed catalog document: {0}")]
    Parse(String),
}

/// Errors from the notes store
#[derive(Error, Debug)]
pub enum NotesError {
    /// Blank note text is rejected
    #[error("Note text is empty")]
    Empty,

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(String),
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

#[cfg(feature = "native")]
impl From<crate::http::HttpError> for CatalogError {
    fn from(err: crate::http::HttpError) -> Self {
        match err {
            crate::http::HttpError::RateLimited => CatalogError::RateLimit,
            other => CatalogError::Http(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}
