// crates/profile/src/application/common/profile_guard.rs

use crate::domain::entities::{Profile, Status};
use crate::domain::repositories::StatusRepository;
use crate::domain::value_objects::ProfileId;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::{DomainError, Result};
use std::sync::Arc;

/// Contrôles d'existence et de disponibilité partagés par les opérations.
/// Un profil sans ligne Status n'existe pas du point de vue de l'appelant.
#[derive(Clone)]
pub struct ProfileGuard {
    statuses: Arc<dyn StatusRepository>,
}

impl ProfileGuard {
    pub fn new(statuses: Arc<dyn StatusRepository>) -> Self {
        Self { statuses }
    }

    pub async fn ensure_exists(&self, profile_id: ProfileId) -> Result<Status> {
        self.statuses
            .find_by_profile_id(profile_id, None)
            .await?
            .ok_or_else(|| Profile::not_found(profile_id))
    }

    /// Existe, n'est pas gelé et n'est pas bloqué par la modération
    pub async fn ensure_active(&self, profile_id: ProfileId) -> Result<Status> {
        let status = self.ensure_exists(profile_id).await?;

        if status.is_frozen {
            return Err(DomainError::precondition(format!("profile {profile_id} is frozen")));
        }
        if status.is_blocked {
            return Err(DomainError::precondition(format!("profile {profile_id} is blocked")));
        }

        Ok(status)
    }

    /// Un profil ne peut pas agir sur lui-même (like, blocage, plainte)
    pub fn ensure_distinct(profile_id: ProfileId, other_id: ProfileId, field: &'static str) -> Result<()> {
        if profile_id == other_id {
            return Err(DomainError::Validation {
                field,
                reason: "a profile cannot target itself".into(),
            });
        }
        Ok(())
    }
}
