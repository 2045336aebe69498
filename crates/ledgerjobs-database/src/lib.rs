//! # ledgerjobs-database
//!
//! PostgreSQL connection management, the SQL renderer for job queries,
//! and concrete repository implementations for all LedgerJobs entities.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod sql;

pub use connection::connect_pool;
