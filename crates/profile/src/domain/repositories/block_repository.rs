// crates/profile/src/domain/repositories/block_repository.rs

use crate::domain::entities::Block;
use crate::domain::value_objects::ProfileId;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

#[async_trait]
pub trait BlockRepository: Send + Sync {
    /// Idempotent : renvoie le blocage existant s'il y en a déjà un
    async fn add(&self, profile_id: ProfileId, blocked_profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Block>;

    async fn exists(&self, profile_id: ProfileId, blocked_profile_id: ProfileId) -> Result<bool>;
}
