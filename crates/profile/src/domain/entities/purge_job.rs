// crates/profile/src/domain/entities/purge_job.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::entities::EntityMetadata;
use uuid::Uuid;

/// Suppression de blob en attente dans l'outbox
#[derive(Debug, Clone, PartialEq)]
pub struct PurgeJob {
    pub id: Uuid,
    pub path: String,
    pub attempts: i32,
    pub created_at: DateTime<Utc>,
}

impl PurgeJob {
    pub fn new(path: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            path: path.into(),
            attempts: 0,
            created_at: now,
        }
    }
}

impl EntityMetadata for PurgeJob {
    fn entity_name() -> &'static str {
        "PurgeJob"
    }
}
