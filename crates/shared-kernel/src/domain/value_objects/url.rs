// crates/shared-kernel/src/domain/value_objects/url.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url as LibUrl;

/// URL publique http(s), normalisée par la crate `url`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Url(String);

impl Url {
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();
        let parsed = LibUrl::parse(&raw).map_err(|e| DomainError::Validation {
            field: "url",
            reason: format!("'{raw}' is not a valid url: {e}"),
        })?;

        let url = Self(parsed.to_string());
        url.validate()?;
        Ok(url)
    }

    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Ajoute un chemin relatif (clé object store) à une URL de base
    pub fn join(&self, path: &str) -> Result<Self> {
        let base = if self.0.ends_with('/') {
            self.0.clone()
        } else {
            format!("{}/", self.0)
        };
        Self::try_new(format!("{}{}", base, path.trim_start_matches('/')))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Url {
    fn validate(&self) -> Result<()> {
        let parsed = LibUrl::parse(&self.0).map_err(|_| DomainError::Validation {
            field: "url",
            reason: "invalid url state".into(),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(DomainError::Validation {
                field: "url",
                reason: format!("scheme '{other}' is not allowed"),
            }),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Url {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}
