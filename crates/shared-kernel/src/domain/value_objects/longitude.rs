// crates/shared-kernel/src/domain/value_objects/longitude.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Degrés décimaux WGS84, [-180, 180]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Longitude(f64);

impl Longitude {
    pub fn try_new(degrees: f64) -> Result<Self> {
        let longitude = Self(degrees);
        longitude.validate()?;
        Ok(longitude)
    }

    pub fn from_raw(degrees: f64) -> Self {
        Self(degrees)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Longitude {
    fn validate(&self) -> Result<()> {
        if !self.0.is_finite() || !(-180.0..=180.0).contains(&self.0) {
            return Err(DomainError::Validation {
                field: "longitude",
                reason: format!("{} is outside [-180, 180]", self.0),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Longitude {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let degrees = s.trim().parse::<f64>().map_err(|_| DomainError::Validation {
            field: "longitude",
            reason: format!("'{}' is not a number", s.trim()),
        })?;
        Self::try_new(degrees)
    }
}
