//! Configuration for conta-core
//!
//! Constructed by the shell and passed into [`crate::api::ContaStore`];
//! nothing here is read from disk.

use serde::{Deserialize, Serialize};

/// Store-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct StoreConfig {
    /// Remote catalog endpoint settings
    pub catalog: CatalogConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
        }
    }
}

/// Remote catalog client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct CatalogConfig {
    /// Base URL of the reference document endpoint.
    pub base_url: String,
    /// User agent sent with catalog requests.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://comas-erp.internal/api/v1".to_string(),
            user_agent: "conta/1.0".to_string(),
            timeout_secs: 30,
        }
    }
}
