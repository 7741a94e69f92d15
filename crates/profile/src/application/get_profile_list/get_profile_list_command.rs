// crates/profile/src/application/get_profile_list/get_profile_list_command.rs

use crate::domain::entities::Position;
use crate::domain::value_objects::{AgeRange, ProfileId, SearchGender, SearchRadius};

/// Critères de découverte ; déjà validés par la couche transport
#[derive(Debug, Clone)]
pub struct GetProfileListCommand {
    pub requester_id: ProfileId,
    pub search_gender: SearchGender,
    pub age_range: AgeRange,
    pub distance: SearchRadius,
    pub page: u32,
    pub size: u32,
    pub position: Option<Position>,
}
