// crates/profile/src/domain/value_objects/gender.rs

use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Man,
    Woman,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Man => "man",
            Self::Woman => "woman",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "man" => Ok(Self::Man),
            "woman" => Ok(Self::Woman),
            other => Err(DomainError::Validation {
                field: "gender",
                reason: format!("unknown gender '{other}'"),
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Genre recherché, `All` désactive le filtre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchGender {
    Man,
    Woman,
    #[default]
    All,
}

impl SearchGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Man => "man",
            Self::Woman => "woman",
            Self::All => "all",
        }
    }

    pub fn accepts(&self, gender: Gender) -> bool {
        match self {
            Self::All => true,
            Self::Man => gender == Gender::Man,
            Self::Woman => gender == Gender::Woman,
        }
    }
}

impl FromStr for SearchGender {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "man" => Ok(Self::Man),
            "woman" => Ok(Self::Woman),
            "all" => Ok(Self::All),
            other => Err(DomainError::Validation {
                field: "search_gender",
                reason: format!("unknown search gender '{other}'"),
            }),
        }
    }
}

impl fmt::Display for SearchGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
