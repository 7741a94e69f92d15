// crates/profile/src/application/saga/saga_outcome.rs

use crate::domain::entities::{Filter, Identity, Image, Navigator, Profile, Status};
use crate::domain::models::ProfileAggregate;
use shared_kernel::errors::{DomainError, Result};

/// Enregistrements produits par les étapes d'une saga validée
#[derive(Debug, Default, Clone)]
pub struct SagaOutcome {
    pub profile: Option<Profile>,
    pub navigator: Option<Navigator>,
    pub filter: Option<Filter>,
    pub identity: Option<Identity>,
    pub status: Option<Status>,
    pub images: Vec<Image>,
}

impl SagaOutcome {
    pub fn into_profile(self) -> Result<Profile> {
        self.profile.ok_or_else(|| missing("profile"))
    }

    pub fn into_aggregate(self) -> Result<ProfileAggregate> {
        Ok(ProfileAggregate {
            profile: self.profile.ok_or_else(|| missing("profile"))?,
            navigator: self.navigator,
            filter: self.filter.ok_or_else(|| missing("filter"))?,
            identity: self.identity.ok_or_else(|| missing("identity"))?,
            status: self.status.ok_or_else(|| missing("status"))?,
            images: self.images,
        })
    }
}

fn missing(part: &str) -> DomainError {
    DomainError::Internal(format!("saga outcome has no {part}"))
}
