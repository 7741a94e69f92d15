// crates/profile/src/domain/entities/image.rs

use crate::domain::value_objects::{ImageId, ProfileId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::Url;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    pub profile_id: ProfileId,
    /// Clé dans l'object store
    pub name: String,
    pub url: Url,
    pub size: i64,
    pub is_blocked: bool,
    pub is_primary: bool,
    pub is_private: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Image {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn is_public(&self) -> bool {
        !self.is_deleted() && !self.is_blocked && !self.is_private
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewImage {
    pub profile_id: ProfileId,
    pub name: String,
    pub url: Url,
    pub size: i64,
    pub is_primary: bool,
    pub is_private: bool,
}

impl EntityMetadata for Image {
    fn entity_name() -> &'static str {
        "Image"
    }
}
