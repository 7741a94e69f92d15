// crates/profile/src/domain/models/profile_aggregate.rs

use crate::domain::entities::{Filter, Identity, Image, Navigator, Profile, Status};
use serde::Serialize;

/// Vue fusionnée des six sous-enregistrements d'un profil
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileAggregate {
    pub profile: Profile,
    pub navigator: Option<Navigator>,
    pub filter: Filter,
    pub identity: Identity,
    pub status: Status,
    pub images: Vec<Image>,
}
