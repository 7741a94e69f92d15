// crates/profile/src/domain/repositories/image_repository.rs

use crate::domain::entities::{Image, NewImage};
use crate::domain::value_objects::{ImageId, ProfileId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn add(&self, image: &NewImage, tx: Option<&mut dyn Transaction>) -> Result<Image>;

    async fn find_by_id(&self, id: ImageId, tx: Option<&mut dyn Transaction>) -> Result<Option<Image>>;

    /// Toutes les images, supprimées et modérées comprises (gestion propriétaire, purge)
    async fn list_all(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Vec<Image>>;

    /// Images non supprimées
    async fn list_active(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Vec<Image>>;

    /// Ni supprimées, ni bloquées, ni privées
    async fn list_public(&self, profile_id: ProfileId) -> Result<Vec<Image>>;

    async fn last_public(&self, profile_id: ProfileId) -> Result<Option<Image>>;

    /// Suppression logique, `NotFound` si l'image n'existe pas
    async fn mark_deleted(&self, id: ImageId, at: DateTime<Utc>, tx: Option<&mut dyn Transaction>) -> Result<Image>;
}
