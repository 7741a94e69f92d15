// crates/profile/src/domain/repositories/navigator_repository.rs

use crate::domain::entities::Navigator;
use crate::domain::value_objects::ProfileId;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

#[async_trait]
pub trait NavigatorRepository: Send + Sync {
    async fn add(&self, navigator: &Navigator, tx: Option<&mut dyn Transaction>) -> Result<Navigator>;

    async fn update(&self, navigator: &Navigator, tx: Option<&mut dyn Transaction>) -> Result<Navigator>;

    async fn exists(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<bool>;

    async fn find_by_profile_id(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Navigator>>;

    /// Distance sphérique en mètres calculée par le moteur, `None` si une position manque
    async fn distance_between(&self, from: ProfileId, to: ProfileId) -> Result<Option<f64>>;
}
