// crates/profile/src/domain/params/profile_patch.rs

use crate::domain::value_objects::{DisplayName, Gender};
use chrono::NaiveDate;

/// `None` : champ non fourni. `Some(None)` : champ vidé par l'appelant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub display_name: Option<DisplayName>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub location: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub height: Option<Option<i16>>,
    pub weight: Option<Option<i16>>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
