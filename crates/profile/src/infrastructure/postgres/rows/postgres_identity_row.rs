// crates/profile/src/infrastructure/postgres/rows/postgres_identity_row.rs

use crate::domain::entities::Identity;
use crate::domain::value_objects::ProfileId;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub(crate) const IDENTITY_COLUMNS: &str = r#"
    profile_id, external_id, username, first_name, last_name,
    language_code, allows_write_to_pm, created_at, updated_at
"#;

#[derive(FromRow, Debug)]
pub struct PostgresIdentityRow {
    pub profile_id: i64,
    pub external_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub language_code: Option<String>,
    pub allows_write_to_pm: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostgresIdentityRow> for Identity {
    fn from(row: PostgresIdentityRow) -> Self {
        Identity {
            profile_id: ProfileId::from_raw(row.profile_id),
            external_id: row.external_id,
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            language_code: row.language_code,
            allows_write_to_pm: row.allows_write_to_pm,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
