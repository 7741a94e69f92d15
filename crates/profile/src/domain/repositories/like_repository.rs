// crates/profile/src/domain/repositories/like_repository.rs

use crate::domain::entities::Like;
use crate::domain::value_objects::{LikeId, ProfileId};
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// `AlreadyExists` si la paire existe déjà
    async fn add(&self, profile_id: ProfileId, liked_profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Like>;

    async fn update(&self, id: LikeId, is_liked: bool, tx: Option<&mut dyn Transaction>) -> Result<Like>;

    async fn find_by_id(&self, id: LikeId, tx: Option<&mut dyn Transaction>) -> Result<Option<Like>>;

    async fn find_by_pair(&self, profile_id: ProfileId, liked_profile_id: ProfileId) -> Result<Option<Like>>;
}
