//! # ledgerjobs-storage
//!
//! Document storage for LedgerJobs. Uploaded résumés are written through
//! the [`StorageProvider`] trait from `ledgerjobs-core`; the local
//! filesystem provider is the only backend.

pub mod providers;
pub mod resume;

pub use providers::LocalStorageProvider;
pub use resume::{resume_public_url, resume_storage_path};

pub use ledgerjobs_core::traits::storage::StorageProvider;
