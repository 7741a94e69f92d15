// crates/profile/src/domain/entities/filter.rs

use crate::domain::value_objects::{AgeRange, ProfileId, SearchGender, SearchRadius};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;

/// Critères de recherche enregistrés
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub profile_id: ProfileId,
    pub search_gender: SearchGender,
    pub age_range: AgeRange,
    pub distance: SearchRadius,
    pub page: u32,
    pub size: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Filter {
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
}

impl EntityMetadata for Filter {
    fn entity_name() -> &'static str {
        "Filter"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "filters_pkey" => "profile_id",
            _ => "unique_constraint",
        }
    }
}
