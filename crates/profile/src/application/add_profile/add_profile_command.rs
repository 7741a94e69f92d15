// crates/profile/src/application/add_profile/add_profile_command.rs

use crate::application::common::ImageUpload;
use crate::domain::entities::Position;
use crate::domain::value_objects::{AgeRange, DisplayName, Gender, ProfileId, SearchGender, SearchRadius};
use chrono::NaiveDate;

/// Données du compte externe attachées au profil
#[derive(Debug, Clone, Default)]
pub struct IdentityInput {
    pub external_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub language_code: Option<String>,
    pub allows_write_to_pm: bool,
}

#[derive(Debug, Clone)]
pub struct AddProfileCommand {
    pub profile_id: ProfileId,
    pub display_name: DisplayName,
    pub birthday: NaiveDate,
    pub gender: Gender,
    pub location: Option<String>,
    pub description: Option<String>,
    pub height: Option<i16>,
    pub weight: Option<i16>,
    pub is_left_hand: bool,
    pub position: Option<Position>,
    pub images: Vec<ImageUpload>,
    pub search_gender: SearchGender,
    pub age_range: AgeRange,
    pub distance: SearchRadius,
    pub page_size: Option<u32>,
    pub identity: IdentityInput,
}
