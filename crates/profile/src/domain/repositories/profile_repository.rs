// crates/profile/src/domain/repositories/profile_repository.rs

use crate::domain::entities::Profile;
use crate::domain::models::{ProfileListItem, ProfileListQuery};
use crate::domain::params::ProfilePatch;
use crate::domain::value_objects::ProfileId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::application::PageResponse;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn add(&self, profile: &Profile, tx: Option<&mut dyn Transaction>) -> Result<Profile>;

    /// `NotFound` si le profil n'existe pas
    async fn update(&self, id: ProfileId, patch: &ProfilePatch, tx: Option<&mut dyn Transaction>) -> Result<Profile>;

    async fn touch_last_online(&self, id: ProfileId, at: DateTime<Utc>, tx: Option<&mut dyn Transaction>) -> Result<()>;

    async fn find_by_id(&self, id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Profile>>;

    /// Supprime le profil et, en cascade, tous ses sous-enregistrements
    async fn delete(&self, id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<()>;

    /// Recherche de proximité paginée, triée par distance puis dernière activité
    async fn find_nearby(&self, query: &ProfileListQuery) -> Result<PageResponse<ProfileListItem>>;
}
