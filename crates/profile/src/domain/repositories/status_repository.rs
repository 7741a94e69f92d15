// crates/profile/src/domain/repositories/status_repository.rs

use crate::domain::entities::Status;
use crate::domain::params::StatusPatch;
use crate::domain::value_objects::ProfileId;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

#[async_trait]
pub trait StatusRepository: Send + Sync {
    async fn add(&self, status: &Status, tx: Option<&mut dyn Transaction>) -> Result<Status>;

    /// Seuls les drapeaux présents dans le patch sont écrits
    async fn update(&self, profile_id: ProfileId, patch: &StatusPatch, tx: Option<&mut dyn Transaction>) -> Result<Status>;

    async fn find_by_profile_id(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Status>>;
}
