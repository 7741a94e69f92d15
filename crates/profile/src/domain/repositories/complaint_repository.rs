// crates/profile/src/domain/repositories/complaint_repository.rs

use crate::domain::entities::Complaint;
use crate::domain::value_objects::ProfileId;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    async fn add(
        &self,
        profile_id: ProfileId,
        complained_profile_id: ProfileId,
        reason: &str,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Complaint>;

    /// Nombre de plaintes reçues par `profile_id`
    async fn count_against(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<u64>;
}
