// crates/profile/src/application/get_profile_short_info/get_profile_short_info_dto.rs

use crate::domain::value_objects::{DisplayName, ProfileId};
use serde::Serialize;

/// Aperçu léger (cartes, notifications)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileShortInfoDto {
    pub id: ProfileId,
    pub display_name: DisplayName,
    pub image_url: Option<String>,
    pub is_frozen: bool,
    pub is_blocked: bool,
    pub is_premium: bool,
}
