// crates/profile/src/domain/params/filter_patch.rs

use crate::domain::value_objects::{AgeRange, SearchGender, SearchRadius};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub search_gender: Option<SearchGender>,
    pub age_range: Option<AgeRange>,
    pub distance: Option<SearchRadius>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl FilterPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
