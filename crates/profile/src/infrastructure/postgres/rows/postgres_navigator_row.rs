// crates/profile/src/infrastructure/postgres/rows/postgres_navigator_row.rs

use crate::domain::entities::Navigator;
use crate::domain::value_objects::ProfileId;
use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::{CountryCode, GeoPoint};
use sqlx::FromRow;

pub(crate) const NAVIGATOR_COLUMNS: &str = r#"
    profile_id,
    ST_Y(location::geometry) AS lat,
    ST_X(location::geometry) AS lon,
    country_code, created_at, updated_at
"#;

#[derive(FromRow, Debug)]
pub struct PostgresNavigatorRow {
    pub profile_id: i64,
    pub lat: f64,
    pub lon: f64,
    pub country_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostgresNavigatorRow> for Navigator {
    fn from(row: PostgresNavigatorRow) -> Self {
        Navigator {
            profile_id: ProfileId::from_raw(row.profile_id),
            point: GeoPoint::from_raw(row.lat, row.lon),
            country_code: row.country_code.map(CountryCode::new_unchecked),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
