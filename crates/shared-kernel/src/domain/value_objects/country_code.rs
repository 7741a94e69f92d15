// crates/shared-kernel/src/domain/value_objects/country_code.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Code pays ISO 3166-1 alpha-2, stocké en majuscules
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn try_new(code: impl Into<String>) -> Result<Self> {
        let normalized = code.into().trim().to_uppercase();
        let country = Self(normalized);
        country.validate()?;
        Ok(country)
    }

    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for CountryCode {
    fn validate(&self) -> Result<()> {
        if self.0.len() != 2 || !self.0.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(DomainError::Validation {
                field: "country_code",
                reason: format!("'{}' is not an ISO 3166-1 alpha-2 code", self.0),
            });
        }
        Ok(())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        Self::try_new(s)
    }
}
