//! # ledgerjobs-auth
//!
//! Authentication and session management for LedgerJobs.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation
//! - `password` — Argon2id password hashing
//! - `session` — Session lifecycle (signup, login, refresh, logout)

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use session::SessionManager;
