// crates/profile/src/domain/models/profile_list.rs

use crate::domain::value_objects::{AgeRange, DisplayName, Gender, ProfileId, SearchGender, SearchRadius};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_kernel::application::PageRequest;

/// Paramètres de la recherche de proximité
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileListQuery {
    pub requester_id: ProfileId,
    pub search_gender: SearchGender,
    pub age_range: AgeRange,
    pub distance: SearchRadius,
    pub page: PageRequest,
    /// Seuil de l'heuristique "en ligne"
    pub online_since: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileListItem {
    pub id: ProfileId,
    pub display_name: DisplayName,
    pub age: u32,
    pub gender: Gender,
    pub location: Option<String>,
    /// Mètres, `None` si l'une des deux positions est inconnue
    pub distance: Option<f64>,
    pub last_online: DateTime<Utc>,
    pub is_online: bool,
    pub image_url: Option<String>,
}
