//! # ledgerjobs-core
//!
//! Core crate for LedgerJobs. Contains configuration schemas, the job
//! filter / query-description types, pagination and sorting types, the
//! storage-provider trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other LedgerJobs crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
