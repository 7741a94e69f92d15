// crates/profile/src/infrastructure/notifier/http_like_notifier.rs

use crate::application::ports::{LikeNotifier, NewLikeNotification};
use async_trait::async_trait;
use reqwest::Client;
use shared_kernel::errors::{DomainError, Result};
use std::time::Duration;

const SERVICE: &str = "like_notifier";

/// Envoie les notifications "nouveau like" en JSON à un webhook
pub struct HttpLikeNotifier {
    client: Client,
    endpoint: String,
}

impl HttpLikeNotifier {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::collaborator(SERVICE, e))?;

        Ok(Self { client, endpoint: endpoint.into() })
    }

    /// `PROFILE_LIKE_NOTIFIER_URL`, délai `PROFILE_LIKE_NOTIFIER_TIMEOUT_SECS` (5 s par défaut)
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var("PROFILE_LIKE_NOTIFIER_URL").map_err(|_| DomainError::Validation {
            field: "PROFILE_LIKE_NOTIFIER_URL",
            reason: "must be set".into(),
        })?;
        let timeout = std::env::var("PROFILE_LIKE_NOTIFIER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self::new(endpoint, Duration::from_secs(timeout))
    }
}

#[async_trait]
impl LikeNotifier for HttpLikeNotifier {
    async fn notify_new_like(&self, notification: &NewLikeNotification) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(notification)
            .send()
            .await
            .map_err(|e| DomainError::collaborator(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::collaborator(
                SERVICE,
                format!("webhook answered {status} for recipient {}", notification.recipient_id),
            ));
        }

        tracing::debug!(recipient_id = %notification.recipient_id, "💌 Like notification sent");
        Ok(())
    }
}
