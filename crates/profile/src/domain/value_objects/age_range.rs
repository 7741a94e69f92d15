// crates/profile/src/domain/value_objects/age_range.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Bornes d'âge inclusives du filtre de recherche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    from: u8,
    to: u8,
}

impl AgeRange {
    pub const MIN_AGE: u8 = 18;
    pub const MAX_AGE: u8 = 100;

    pub fn try_new(from: u8, to: u8) -> Result<Self> {
        let range = Self { from, to };
        range.validate()?;
        Ok(range)
    }

    pub fn from_raw(from: u8, to: u8) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> u8 {
        self.from
    }

    pub fn to(&self) -> u8 {
        self.to
    }

    pub fn contains(&self, age: u32) -> bool {
        (self.from as u32..=self.to as u32).contains(&age)
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { from: Self::MIN_AGE, to: Self::MAX_AGE }
    }
}

impl ValueObject for AgeRange {
    fn validate(&self) -> Result<()> {
        if self.from < Self::MIN_AGE || self.to > Self::MAX_AGE {
            return Err(DomainError::Validation {
                field: "age_range",
                reason: format!("bounds must stay within [{}, {}]", Self::MIN_AGE, Self::MAX_AGE),
            });
        }
        if self.from > self.to {
            return Err(DomainError::Validation {
                field: "age_range",
                reason: format!("age_from {} is greater than age_to {}", self.from, self.to),
            });
        }
        Ok(())
    }
}
