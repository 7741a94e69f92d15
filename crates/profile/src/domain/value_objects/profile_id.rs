// crates/profile/src/domain/value_objects/profile_id.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;

/// Clé du compte externe (messagerie) qui identifie un profil et tous ses sous-enregistrements
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(i64);

impl ProfileId {
    pub fn try_new(id: i64) -> Result<Self> {
        let profile_id = Self(id);
        profile_id.validate()?;
        Ok(profile_id)
    }

    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ValueObject for ProfileId {
    fn validate(&self) -> Result<()> {
        if self.0 <= 0 {
            return Err(DomainError::Validation {
                field: "profile_id",
                reason: format!("{} is not a valid account key", self.0),
            });
        }
        Ok(())
    }
}

impl FromStr for ProfileId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        let id = s.trim().parse::<i64>().map_err(|_| DomainError::Validation {
            field: "profile_id",
            reason: format!("'{s}' is not a numeric id"),
        })?;
        Self::try_new(id)
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
