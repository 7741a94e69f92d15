// crates/shared-kernel/src/domain/value_objects/latitude.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Degrés décimaux WGS84, [-90, 90]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Latitude(f64);

impl Latitude {
    pub fn try_new(degrees: f64) -> Result<Self> {
        let latitude = Self(degrees);
        latitude.validate()?;
        Ok(latitude)
    }

    pub fn from_raw(degrees: f64) -> Self {
        Self(degrees)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Latitude {
    fn validate(&self) -> Result<()> {
        if !self.0.is_finite() || !(-90.0..=90.0).contains(&self.0) {
            return Err(DomainError::Validation {
                field: "latitude",
                reason: format!("{} is outside [-90, 90]", self.0),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Latitude {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let degrees = s.trim().parse::<f64>().map_err(|_| DomainError::Validation {
            field: "latitude",
            reason: format!("'{}' is not a number", s.trim()),
        })?;
        Self::try_new(degrees)
    }
}
