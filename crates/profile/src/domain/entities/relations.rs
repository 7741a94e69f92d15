// crates/profile/src/domain/entities/relations.rs

use crate::domain::value_objects::{BlockId, ComplaintId, LikeId, ProfileId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;

/// `profile_id` a bloqué `blocked_profile_id` (sens unique)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub profile_id: ProfileId,
    pub blocked_profile_id: ProfileId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: LikeId,
    pub profile_id: ProfileId,
    pub liked_profile_id: ProfileId,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: ComplaintId,
    pub profile_id: ProfileId,
    pub complained_profile_id: ProfileId,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl EntityMetadata for Block {
    fn entity_name() -> &'static str {
        "Block"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "blocks_profile_id_blocked_profile_id_key" => "blocked_profile_id",
            _ => "unique_constraint",
        }
    }
}

impl EntityMetadata for Like {
    fn entity_name() -> &'static str {
        "Like"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "likes_profile_id_liked_profile_id_key" => "liked_profile_id",
            _ => "unique_constraint",
        }
    }
}

impl EntityMetadata for Complaint {
    fn entity_name() -> &'static str {
        "Complaint"
    }
}
