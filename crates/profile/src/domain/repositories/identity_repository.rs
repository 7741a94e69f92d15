// crates/profile/src/domain/repositories/identity_repository.rs

use crate::domain::entities::Identity;
use crate::domain::params::IdentityPatch;
use crate::domain::value_objects::ProfileId;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

#[async_trait]
pub trait IdentityRepository: Send + Sync {
    async fn add(&self, identity: &Identity, tx: Option<&mut dyn Transaction>) -> Result<Identity>;

    async fn update(&self, profile_id: ProfileId, patch: &IdentityPatch, tx: Option<&mut dyn Transaction>) -> Result<Identity>;

    async fn find_by_profile_id(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Identity>>;
}
