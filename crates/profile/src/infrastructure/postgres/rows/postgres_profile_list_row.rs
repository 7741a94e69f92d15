// crates/profile/src/infrastructure/postgres/rows/postgres_profile_list_row.rs

use crate::domain::entities::age_on;
use crate::domain::models::ProfileListItem;
use crate::domain::value_objects::{DisplayName, Gender, ProfileId};
use chrono::{DateTime, NaiveDate, Utc};
use shared_kernel::errors::Result;
use sqlx::FromRow;

/// Ligne de la recherche de proximité
#[derive(FromRow, Debug)]
pub struct PostgresProfileListRow {
    pub id: i64,
    pub display_name: String,
    pub birthday: NaiveDate,
    pub gender: String,
    pub location: Option<String>,
    pub distance: Option<f64>,
    pub last_online: DateTime<Utc>,
    pub is_online: bool,
    pub image_url: Option<String>,
}

impl PostgresProfileListRow {
    pub fn into_item(self, today: NaiveDate) -> Result<ProfileListItem> {
        Ok(ProfileListItem {
            id: ProfileId::from_raw(self.id),
            display_name: DisplayName::from_raw(self.display_name),
            age: age_on(self.birthday, today),
            gender: self.gender.parse::<Gender>()?,
            location: self.location,
            distance: self.distance,
            last_online: self.last_online,
            is_online: self.is_online,
            image_url: self.image_url,
        })
    }
}
