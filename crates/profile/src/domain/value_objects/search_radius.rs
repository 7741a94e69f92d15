// crates/profile/src/domain/value_objects/search_radius.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Rayon de recherche en kilomètres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchRadius(f64);

impl SearchRadius {
    pub const DEFAULT_KM: f64 = 100.0;

    pub fn try_new(km: f64) -> Result<Self> {
        let radius = Self(km);
        radius.validate()?;
        Ok(radius)
    }

    pub fn from_raw(km: f64) -> Self {
        Self(km)
    }

    pub fn km(&self) -> f64 {
        self.0
    }

    pub fn meters(&self) -> f64 {
        self.0 * 1000.0
    }
}

impl Default for SearchRadius {
    fn default() -> Self {
        Self(Self::DEFAULT_KM)
    }
}

impl ValueObject for SearchRadius {
    fn validate(&self) -> Result<()> {
        if !self.0.is_finite() || self.0 < 0.0 {
            return Err(DomainError::Validation {
                field: "distance",
                reason: "distance must be a non-negative number of kilometers".into(),
            });
        }
        Ok(())
    }
}
