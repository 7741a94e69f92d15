// crates/shared-kernel/src/infrastructure/retry.rs

use crate::errors::{DomainError, Result};
use rand::Rng;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 20,
        }
    }
}

/// Rejoue `action` uniquement sur `ConcurrencyConflict` (backoff exponentiel + jitter).
/// Toute autre erreur est remontée telle quelle.
pub async fn with_retry<F, Fut, T>(config: RetryConfig, mut action: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    for attempt in 0..=config.max_retries {
        match action().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_concurrency_conflict() && attempt < config.max_retries => {
                let base = config.initial_backoff_ms * 2u64.pow(attempt);
                let jitter = rand::rng().random_range(0..base / 4 + 1);
                let backoff = Duration::from_millis(base + jitter);

                tracing::warn!(
                    attempt = attempt + 1,
                    max = config.max_retries,
                    ?backoff,
                    "🔄 Concurrency conflict, retrying"
                );

                tokio::time::sleep(backoff).await;
            }
            Err(e) if e.is_concurrency_conflict() => {
                return Err(DomainError::TooManyConflicts(format!(
                    "gave up after {} retries: {}",
                    config.max_retries, e
                )));
            }
            Err(e) => return Err(e),
        }
    }

    Err(DomainError::TooManyConflicts(format!(
        "gave up after {} retries",
        config.max_retries
    )))
}
