//! Database configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// PostgreSQL pool configuration.
///
/// Defaults suit the board's read-heavy profile: searches are many
/// short SELECTs while writes (saves, profiles, postings) are rare, so
/// the pool keeps a small warm floor and recycles connections on a
/// fixed lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Warm connections kept open through idle periods.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Seconds to wait for a free connection before failing the query.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
    /// Seconds an idle connection may sit before being dropped.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
    /// Minutes a connection may live before being recycled.
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_minutes: u64,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_seconds)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_seconds)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_minutes * 60)
    }
}

fn default_max_connections() -> u32 {
    16
}

fn default_min_connections() -> u32 {
    2
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_max_lifetime() -> u64 {
    30
}
