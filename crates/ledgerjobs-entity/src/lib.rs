//! # ledgerjobs-entity
//!
//! Domain entity models for LedgerJobs. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod job;
pub mod saved_job;
pub mod session;
pub mod talent;
pub mod user;
