// crates/profile/src/infrastructure/postgres/rows/postgres_purge_job_row.rs

use crate::domain::entities::PurgeJob;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow, Debug)]
pub struct PostgresPurgeJobRow {
    pub id: Uuid,
    pub path: String,
    pub attempts: i32,
    pub created_at: DateTime<Utc>,
}

impl From<PostgresPurgeJobRow> for PurgeJob {
    fn from(row: PostgresPurgeJobRow) -> Self {
        PurgeJob {
            id: row.id,
            path: row.path,
            attempts: row.attempts,
            created_at: row.created_at,
        }
    }
}
