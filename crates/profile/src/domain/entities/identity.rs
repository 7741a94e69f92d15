// crates/profile/src/domain/entities/identity.rs

use crate::domain::value_objects::ProfileId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;

/// Données du compte de messagerie, rafraîchies à chaque mise à jour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub profile_id: ProfileId,
    pub external_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub language_code: Option<String>,
    pub allows_write_to_pm: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntityMetadata for Identity {
    fn entity_name() -> &'static str {
        "Identity"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "identities_pkey" => "profile_id",
            "identities_external_id_key" => "external_id",
            _ => "unique_constraint",
        }
    }
}
