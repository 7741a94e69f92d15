// crates/profile/src/application/update_profile/update_profile_command.rs

use crate::application::common::ImageUpload;
use crate::domain::entities::Position;
use crate::domain::params::{FilterPatch, IdentityPatch, ProfilePatch};
use crate::domain::value_objects::ProfileId;

/// Chaque patch ne porte que les champs fournis par l'appelant
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    pub profile_id: ProfileId,
    pub profile: ProfilePatch,
    pub position: Option<Position>,
    pub images: Vec<ImageUpload>,
    pub filter: FilterPatch,
    pub identity: IdentityPatch,
}

impl UpdateProfileCommand {
    pub fn new(profile_id: ProfileId) -> Self {
        Self {
            profile_id,
            profile: ProfilePatch::default(),
            position: None,
            images: Vec::new(),
            filter: FilterPatch::default(),
            identity: IdentityPatch::default(),
        }
    }
}
