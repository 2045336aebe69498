//! Custom Axum extractors.

pub mod auth;
pub mod filter;

pub use auth::AuthUser;
pub use filter::JobFilterParams;
