// crates/profile/src/domain/repositories/filter_repository.rs

use crate::domain::entities::Filter;
use crate::domain::params::FilterPatch;
use crate::domain::value_objects::ProfileId;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

#[async_trait]
pub trait FilterRepository: Send + Sync {
    async fn add(&self, filter: &Filter, tx: Option<&mut dyn Transaction>) -> Result<Filter>;

    async fn update(&self, profile_id: ProfileId, patch: &FilterPatch, tx: Option<&mut dyn Transaction>) -> Result<Filter>;

    async fn find_by_profile_id(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Filter>>;
}
