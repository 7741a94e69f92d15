// crates/profile/src/infrastructure/postgres/rows/postgres_profile_row.rs

use crate::domain::entities::Profile;
use crate::domain::value_objects::{DisplayName, Gender, ProfileId};
use chrono::{DateTime, NaiveDate, Utc};
use shared_kernel::errors::{DomainError, Result};
use sqlx::FromRow;

pub(crate) const PROFILE_COLUMNS: &str = r#"
    id, display_name, birthday, gender, location, description,
    height, weight, last_online, created_at, updated_at
"#;

#[derive(FromRow, Debug)]
pub struct PostgresProfileRow {
    pub id: i64,
    pub display_name: String,
    pub birthday: NaiveDate,
    pub gender: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub height: Option<i16>,
    pub weight: Option<i16>,
    pub last_online: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PostgresProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: PostgresProfileRow) -> Result<Self> {
        // Données déjà validées à l'écriture : pas de revalidation du nom
        Ok(Profile {
            id: ProfileId::from_raw(row.id),
            display_name: DisplayName::from_raw(row.display_name),
            birthday: row.birthday,
            gender: row.gender.parse::<Gender>()?,
            location: row.location,
            description: row.description,
            height: row.height,
            weight: row.weight,
            last_online: row.last_online,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
