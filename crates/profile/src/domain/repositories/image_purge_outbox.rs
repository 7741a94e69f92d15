// crates/profile/src/domain/repositories/image_purge_outbox.rs

use crate::domain::entities::PurgeJob;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use uuid::Uuid;

/// File durable des blobs à supprimer de l'object store
#[async_trait]
pub trait ImagePurgeOutbox: Send + Sync {
    /// Écrit dans la même transaction que la mutation des lignes
    async fn enqueue(&self, jobs: &[PurgeJob], tx: Option<&mut dyn Transaction>) -> Result<()>;

    /// Réserve jusqu'à `limit` jobs non traités ayant moins de `max_attempts` échecs
    async fn fetch_unprocessed(&self, limit: u32, max_attempts: i32) -> Result<Vec<PurgeJob>>;

    async fn mark_as_processed(&self, ids: &[Uuid]) -> Result<()>;

    async fn mark_as_failed(&self, id: Uuid, last_error: String) -> Result<()>;
}
