//! Résumé storage configuration.

use serde::{Deserialize, Serialize};

/// File storage configuration for résumé documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for stored files.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Public base URL under which stored files are served.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Maximum résumé upload size in bytes.
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Allowed résumé file extensions.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            public_base_url: default_public_base_url(),
            max_upload_size_bytes: default_max_upload(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_data_root() -> String {
    "data/storage".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:8080/files".to_string()
}

fn default_max_upload() -> u64 {
    10 * 1024 * 1024
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["pdf".to_string(), "doc".to_string(), "docx".to_string()]
}
