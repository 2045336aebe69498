//! Storage provider trait for pluggable document storage backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Metadata about a stored object.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StorageObjectMeta {
    /// Path within the storage provider.
    pub path: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type (if known).
    pub mime_type: Option<String>,
    /// Last modified timestamp.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}

/// Trait for document storage backends.
///
/// Résumés and other uploads are written through this seam so the service
/// layer stays independent of where the bytes land. The trait is defined
/// here in `ledgerjobs-core` and implemented in `ledgerjobs-storage`.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and writable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read a stored object into memory.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Write bytes to an object at the given path, creating parents.
    async fn write_bytes(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Delete the object at the given path.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether an object exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Get metadata about a stored object.
    async fn metadata(&self, path: &str) -> AppResult<StorageObjectMeta>;
}
