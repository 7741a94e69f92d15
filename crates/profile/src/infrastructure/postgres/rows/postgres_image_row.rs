// crates/profile/src/infrastructure/postgres/rows/postgres_image_row.rs

use crate::domain::entities::Image;
use crate::domain::value_objects::{ImageId, ProfileId};
use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::Url;
use sqlx::FromRow;

pub(crate) const IMAGE_COLUMNS: &str = r#"
    id, profile_id, name, url, size, is_blocked, is_primary, is_private,
    deleted_at, created_at, updated_at
"#;

#[derive(FromRow, Debug)]
pub struct PostgresImageRow {
    pub id: i64,
    pub profile_id: i64,
    pub name: String,
    pub url: String,
    pub size: i64,
    pub is_blocked: bool,
    pub is_primary: bool,
    pub is_private: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostgresImageRow> for Image {
    fn from(row: PostgresImageRow) -> Self {
        Image {
            id: ImageId::from_raw(row.id),
            profile_id: ProfileId::from_raw(row.profile_id),
            name: row.name,
            url: Url::new_unchecked(row.url),
            size: row.size,
            is_blocked: row.is_blocked,
            is_primary: row.is_primary,
            is_private: row.is_private,
            deleted_at: row.deleted_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
