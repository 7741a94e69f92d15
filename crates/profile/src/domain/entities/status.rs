// crates/profile/src/domain/entities/status.rs

use crate::domain::value_objects::ProfileId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;

/// Drapeaux de visibilité et de modération, modifiables indépendamment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub profile_id: ProfileId,
    pub is_frozen: bool,
    pub is_blocked: bool,
    pub is_premium: bool,
    pub is_show_distance: bool,
    pub is_invisible: bool,
    pub is_left_hand: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Status {
    pub fn initial(profile_id: ProfileId, now: DateTime<Utc>) -> Self {
        Self {
            profile_id,
            is_frozen: false,
            is_blocked: false,
            is_premium: false,
            is_show_distance: true,
            is_invisible: false,
            is_left_hand: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Ni gelé ni bloqué par la modération
    pub fn is_active(&self) -> bool {
        !self.is_frozen && !self.is_blocked
    }
}

impl EntityMetadata for Status {
    fn entity_name() -> &'static str {
        "Status"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "statuses_pkey" => "profile_id",
            _ => "unique_constraint",
        }
    }
}
