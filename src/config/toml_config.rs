use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML configuration file, e.g.
///
/// ```toml
/// [api]
/// base_url = "https://store.example.com/api"
/// timeout_seconds = 10
///
/// [storage]
/// path = "/var/lib/storefront/cart"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub api: Option<ApiSection>,
    pub storage: Option<StorageSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSection {
    pub path: Option<String>,
}

impl FileConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn api_base_url(&self) -> Option<String> {
        self.api.as_ref().and_then(|a| a.base_url.clone())
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.api.as_ref().and_then(|a| a.timeout_seconds)
    }

    pub fn storage_path(&self) -> Option<String> {
        self.storage.as_ref().and_then(|s| s.path.clone())
    }
}
