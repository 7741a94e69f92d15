// crates/profile/src/domain/entities/profile.rs

use crate::domain::value_objects::{DisplayName, Gender, ProfileId};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;

/// Noyau du profil
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub display_name: DisplayName,
    pub birthday: NaiveDate,
    pub gender: Gender,
    pub location: Option<String>,
    pub description: Option<String>,
    pub height: Option<i16>,
    pub weight: Option<i16>,
    pub last_online: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Âge révolu à la date donnée, jamais stocké
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        age_on(self.birthday, today)
    }

    pub fn is_online(&self, now: DateTime<Utc>, window: chrono::Duration) -> bool {
        now - self.last_online <= window
    }
}

pub fn age_on(birthday: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birthday.year();
    if (today.month(), today.day()) < (birthday.month(), birthday.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

impl EntityMetadata for Profile {
    fn entity_name() -> &'static str {
        "Profile"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "profiles_pkey" => "id",
            _ => "unique_constraint",
        }
    }
}
