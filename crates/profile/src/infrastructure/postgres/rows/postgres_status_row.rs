// crates/profile/src/infrastructure/postgres/rows/postgres_status_row.rs

use crate::domain::entities::Status;
use crate::domain::value_objects::ProfileId;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub(crate) const STATUS_COLUMNS: &str = r#"
    profile_id, is_frozen, is_blocked, is_premium, is_show_distance,
    is_invisible, is_left_hand, created_at, updated_at
"#;

#[derive(FromRow, Debug)]
pub struct PostgresStatusRow {
    pub profile_id: i64,
    pub is_frozen: bool,
    pub is_blocked: bool,
    pub is_premium: bool,
    pub is_show_distance: bool,
    pub is_invisible: bool,
    pub is_left_hand: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostgresStatusRow> for Status {
    fn from(row: PostgresStatusRow) -> Self {
        Status {
            profile_id: ProfileId::from_raw(row.profile_id),
            is_frozen: row.is_frozen,
            is_blocked: row.is_blocked,
            is_premium: row.is_premium,
            is_show_distance: row.is_show_distance,
            is_invisible: row.is_invisible,
            is_left_hand: row.is_left_hand,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
