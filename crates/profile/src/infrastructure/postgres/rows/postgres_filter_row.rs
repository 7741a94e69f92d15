// crates/profile/src/infrastructure/postgres/rows/postgres_filter_row.rs

use crate::domain::entities::Filter;
use crate::domain::value_objects::{AgeRange, ProfileId, SearchGender, SearchRadius};
use chrono::{DateTime, Utc};
use shared_kernel::errors::{DomainError, Result};
use sqlx::FromRow;

pub(crate) const FILTER_COLUMNS: &str = r#"
    profile_id, search_gender, age_from, age_to, distance,
    page, size, created_at, updated_at
"#;

#[derive(FromRow, Debug)]
pub struct PostgresFilterRow {
    pub profile_id: i64,
    pub search_gender: String,
    pub age_from: i16,
    pub age_to: i16,
    pub distance: f64,
    pub page: i32,
    pub size: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PostgresFilterRow> for Filter {
    type Error = DomainError;

    fn try_from(row: PostgresFilterRow) -> Result<Self> {
        Ok(Filter {
            profile_id: ProfileId::from_raw(row.profile_id),
            search_gender: row.search_gender.parse::<SearchGender>()?,
            age_range: AgeRange::from_raw(row.age_from.clamp(0, u8::MAX as i16) as u8, row.age_to.clamp(0, u8::MAX as i16) as u8),
            distance: SearchRadius::from_raw(row.distance),
            page: row.page.max(1) as u32,
            size: row.size.max(1) as u32,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
