// crates/profile/src/infrastructure/postgres/rows/postgres_relation_rows.rs

use crate::domain::entities::{Block, Complaint, Like};
use crate::domain::value_objects::{BlockId, ComplaintId, LikeId, ProfileId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(FromRow, Debug)]
pub struct PostgresBlockRow {
    pub id: i64,
    pub profile_id: i64,
    pub blocked_profile_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<PostgresBlockRow> for Block {
    fn from(row: PostgresBlockRow) -> Self {
        Block {
            id: BlockId::from_raw(row.id),
            profile_id: ProfileId::from_raw(row.profile_id),
            blocked_profile_id: ProfileId::from_raw(row.blocked_profile_id),
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow, Debug)]
pub struct PostgresLikeRow {
    pub id: i64,
    pub profile_id: i64,
    pub liked_profile_id: i64,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostgresLikeRow> for Like {
    fn from(row: PostgresLikeRow) -> Self {
        Like {
            id: LikeId::from_raw(row.id),
            profile_id: ProfileId::from_raw(row.profile_id),
            liked_profile_id: ProfileId::from_raw(row.liked_profile_id),
            is_liked: row.is_liked,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(FromRow, Debug)]
pub struct PostgresComplaintRow {
    pub id: i64,
    pub profile_id: i64,
    pub complained_profile_id: i64,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl From<PostgresComplaintRow> for Complaint {
    fn from(row: PostgresComplaintRow) -> Self {
        Complaint {
            id: ComplaintId::from_raw(row.id),
            profile_id: ProfileId::from_raw(row.profile_id),
            complained_profile_id: ProfileId::from_raw(row.complained_profile_id),
            reason: row.reason,
            created_at: row.created_at,
        }
    }
}
