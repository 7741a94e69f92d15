// crates/profile/src/domain/builders/profile_builder.rs

use crate::domain::entities::Profile;
use crate::domain::value_objects::{DisplayName, Gender, ProfileId};
use chrono::{DateTime, NaiveDate, Utc};

pub struct ProfileBuilder {
    id: ProfileId,
    display_name: DisplayName,
    birthday: NaiveDate,
    gender: Gender,
    location: Option<String>,
    description: Option<String>,
    height: Option<i16>,
    weight: Option<i16>,
}

impl ProfileBuilder {
    pub fn new(id: ProfileId, display_name: DisplayName, birthday: NaiveDate, gender: Gender) -> Self {
        Self {
            id,
            display_name,
            birthday,
            gender,
            location: None,
            description: None,
            height: None,
            weight: None,
        }
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location.filter(|l| !l.trim().is_empty());
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn with_height(mut self, height: Option<i16>) -> Self {
        self.height = height;
        self
    }

    pub fn with_weight(mut self, weight: Option<i16>) -> Self {
        self.weight = weight;
        self
    }

    /// Un profil neuf est considéré en ligne à sa création
    pub fn build(self, now: DateTime<Utc>) -> Profile {
        Profile {
            id: self.id,
            display_name: self.display_name,
            birthday: self.birthday,
            gender: self.gender,
            location: self.location,
            description: self.description,
            height: self.height,
            weight: self.weight,
            last_online: now,
            created_at: now,
            updated_at: now,
        }
    }
}
