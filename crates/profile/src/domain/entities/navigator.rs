// crates/profile/src/domain/entities/navigator.rs

use crate::domain::value_objects::ProfileId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::{CountryCode, GeoPoint};

/// Position géographique d'un profil, au plus une ligne par profil
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navigator {
    pub profile_id: ProfileId,
    pub point: GeoPoint,
    pub country_code: Option<CountryCode>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Position envoyée par l'appelant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub point: GeoPoint,
    pub country_code: Option<CountryCode>,
}

impl Position {
    pub fn new(point: GeoPoint, country_code: Option<CountryCode>) -> Self {
        Self { point, country_code }
    }
}

impl EntityMetadata for Navigator {
    fn entity_name() -> &'static str {
        "Navigator"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "navigators_pkey" => "profile_id",
            _ => "unique_constraint",
        }
    }
}
