//! Server-side proxy to the newsletter subscription API.
//!
//! The upstream API key never reaches clients; the proxy accepts an
//! email address and translates the upstream response into a uniform
//! success or error.

use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use ledgerjobs_core::config::NewsletterConfig;
use ledgerjobs_core::error::AppError;
use ledgerjobs_core::result::AppResult;

#[derive(Serialize)]
struct SubscribeBody<'a> {
    email: &'a str,
    reactivate_existing: bool,
    send_welcome_email: bool,
    utm_source: &'a str,
}

/// Proxies newsletter subscriptions to the upstream publication API.
#[derive(Debug, Clone)]
pub struct NewsletterService {
    client: reqwest::Client,
    config: NewsletterConfig,
}

impl NewsletterService {
    /// Creates a new newsletter service.
    pub fn new(config: NewsletterConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ledgerjobs_core::error::ErrorKind::Configuration,
                    "Failed to build newsletter HTTP client",
                    e,
                )
            })?;
        Ok(Self { client, config })
    }

    /// Subscribe an email address to the newsletter.
    ///
    /// An address that is already subscribed counts as success; the
    /// upstream signals it with a conflict status.
    pub async fn subscribe(&self, email: &str) -> AppResult<()> {
        if !self.config.enabled {
            return Err(AppError::service_unavailable(
                "Newsletter subscriptions are not enabled",
            ));
        }
        if email.trim().is_empty() || !email.contains('@') {
            return Err(AppError::validation("A valid email address is required"));
        }

        let url = format!(
            "{}/publications/{}/subscriptions",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.publication_id
        );
        let body = SubscribeBody {
            email,
            reactivate_existing: false,
            send_welcome_email: self.config.send_welcome_email,
            utm_source: "website",
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ledgerjobs_core::error::ErrorKind::ExternalService,
                    "Newsletter API request failed",
                    e,
                )
            })?;

        let status = response.status().as_u16();
        match classify_upstream_status(status) {
            UpstreamOutcome::Subscribed => {
                info!(email, "Newsletter subscription accepted");
                Ok(())
            }
            UpstreamOutcome::AlreadySubscribed => {
                info!(email, "Email already subscribed to newsletter");
                Ok(())
            }
            UpstreamOutcome::Failed => {
                let detail = response.text().await.unwrap_or_default();
                warn!(email, status, %detail, "Newsletter API rejected subscription");
                Err(AppError::external_service(
                    "Failed to subscribe to newsletter",
                ))
            }
        }
    }
}

/// How an upstream HTTP status maps onto the proxy's uniform result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpstreamOutcome {
    Subscribed,
    AlreadySubscribed,
    Failed,
}

fn classify_upstream_status(status: u16) -> UpstreamOutcome {
    match status {
        200..=299 => UpstreamOutcome::Subscribed,
        409 => UpstreamOutcome::AlreadySubscribed,
        _ => UpstreamOutcome::Failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_subscribe() {
        assert_eq!(classify_upstream_status(200), UpstreamOutcome::Subscribed);
        assert_eq!(classify_upstream_status(201), UpstreamOutcome::Subscribed);
    }

    #[test]
    fn conflict_counts_as_subscribed() {
        assert_eq!(
            classify_upstream_status(409),
            UpstreamOutcome::AlreadySubscribed
        );
    }

    #[test]
    fn other_statuses_fail() {
        assert_eq!(classify_upstream_status(400), UpstreamOutcome::Failed);
        assert_eq!(classify_upstream_status(401), UpstreamOutcome::Failed);
        assert_eq!(classify_upstream_status(500), UpstreamOutcome::Failed);
    }

    #[tokio::test]
    async fn disabled_config_is_unavailable() {
        let svc = NewsletterService::new(NewsletterConfig::default()).unwrap();
        let err = svc.subscribe("someone@example.ie").await.unwrap_err();
        assert_eq!(err.kind, ledgerjobs_core::error::ErrorKind::ServiceUnavailable);
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let config = NewsletterConfig {
            enabled: true,
            ..NewsletterConfig::default()
        };
        let svc = NewsletterService::new(config).unwrap();
        let err = svc.subscribe("not-an-email").await.unwrap_err();
        assert_eq!(err.kind, ledgerjobs_core::error::ErrorKind::Validation);
    }
}
