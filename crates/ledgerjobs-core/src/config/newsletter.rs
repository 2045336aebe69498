//! Newsletter proxy configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the third-party newsletter subscription API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterConfig {
    /// Whether the newsletter proxy is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Base URL of the publication API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// API key used as a bearer token.
    #[serde(default)]
    pub api_key: String,
    /// Publication identifier.
    #[serde(default)]
    pub publication_id: String,
    /// Whether the upstream should send a welcome email on subscribe.
    #[serde(default = "default_true")]
    pub send_welcome_email: bool,
    /// Upstream request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_base_url: default_api_base_url(),
            api_key: String::new(),
            publication_id: String::new(),
            send_welcome_email: default_true(),
            request_timeout_seconds: default_timeout(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.beehiiv.com/v2".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    10
}
