//! Shared types used across crates.

pub mod filter;
pub mod pagination;
pub mod query;
pub mod response;
pub mod sorting;
