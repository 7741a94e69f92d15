// crates/profile/src/application/workers/image_purge_processor.rs

use crate::application::ports::ObjectStore;
use crate::domain::entities::PurgeJob;
use crate::domain::repositories::ImagePurgeOutbox;
use shared_kernel::errors::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;

/// Vide l'outbox de purge : supprime les blobs de l'object store puis marque les jobs.
pub struct ImagePurgeProcessor {
    outbox: Arc<dyn ImagePurgeOutbox>,
    object_store: Arc<dyn ObjectStore>,
    batch_size: u32,
    polling_interval: Duration,
    max_attempts: i32,
}

impl ImagePurgeProcessor {
    pub fn new(
        outbox: Arc<dyn ImagePurgeOutbox>,
        object_store: Arc<dyn ObjectStore>,
        batch_size: u32,
        polling_interval: Duration,
        max_attempts: i32,
    ) -> Self {
        Self { outbox, object_store, batch_size, polling_interval, max_attempts }
    }

    /// Boucle jusqu'à ce que `shutdown` passe à `true`
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        tracing::info!(batch_size = self.batch_size, "🧹 Image purge processor started");

        loop {
            if *shutdown.borrow() {
                break;
            }

            let pause = match self.process_batch().await {
                Ok(count) if count >= self.batch_size as usize => None,
                Ok(0) => Some(self.polling_interval),
                Ok(count) => {
                    tracing::info!(count, "Purged images");
                    Some(self.polling_interval)
                }
                Err(error) => {
                    tracing::error!(%error, "Purge batch failed");
                    Some(self.polling_interval)
                }
            };

            // Batch plein : on reboucle sans dormir pour vider le backlog
            if let Some(pause) = pause {
                tokio::select! {
                    _ = sleep(pause) => {}
                    changed = shutdown.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
        }

        tracing::info!("🛑 Image purge processor stopped");
    }

    pub async fn process_batch(&self) -> Result<usize> {
        let jobs = self
            .outbox
            .fetch_unprocessed(self.batch_size, self.max_attempts)
            .await?;

        if jobs.is_empty() {
            return Ok(0);
        }

        Ok(self.purge(&jobs).await)
    }

    /// Purge best effort, renvoie le nombre de blobs supprimés.
    /// Les échecs restent dans l'outbox avec un compteur de tentatives.
    pub async fn purge(&self, jobs: &[PurgeJob]) -> usize {
        let mut done = Vec::with_capacity(jobs.len());

        for job in jobs {
            match self.object_store.delete(&job.path).await {
                Ok(()) => done.push(job.id),
                Err(error) => {
                    tracing::warn!(job_id = %job.id, path = %job.path, attempts = job.attempts + 1, %error, "Image purge failed");
                    if let Err(mark_error) = self.outbox.mark_as_failed(job.id, error.to_string()).await {
                        tracing::error!(job_id = %job.id, %mark_error, "Could not record purge failure");
                    }
                }
            }
        }

        if done.is_empty() {
            return 0;
        }

        if let Err(error) = self.outbox.mark_as_processed(&done).await {
            // Les blobs sont déjà supprimés ; un nouveau passage sera un no-op
            tracing::error!(%error, count = done.len(), "Could not mark purge jobs as processed");
        }

        done.len()
    }
}
