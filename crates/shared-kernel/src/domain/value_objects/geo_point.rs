// crates/shared-kernel/src/domain/value_objects/geo_point.rs

use crate::domain::value_objects::{Latitude, Longitude, ValueObject};
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Point géographique (SRID 4326). Les distances sont calculées par PostGIS, jamais ici.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: Latitude,
    longitude: Longitude,
}

impl GeoPoint {
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        Ok(Self {
            latitude: Latitude::try_new(lat)?,
            longitude: Longitude::try_new(lon)?,
        })
    }

    pub fn from_raw(lat: f64, lon: f64) -> Self {
        Self {
            latitude: Latitude::from_raw(lat),
            longitude: Longitude::from_raw(lon),
        }
    }

    pub fn lat(&self) -> f64 {
        self.latitude.value()
    }

    pub fn lon(&self) -> f64 {
        self.longitude.value()
    }
}

impl ValueObject for GeoPoint {
    fn validate(&self) -> Result<()> {
        self.latitude.validate()?;
        self.longitude.validate()
    }
}

/// Format "lat,lon"
impl FromStr for GeoPoint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lon) = s.split_once(',').ok_or_else(|| DomainError::Validation {
            field: "geo_point",
            reason: "expected 'lat,lon'".into(),
        })?;

        Ok(Self {
            latitude: lat.parse()?,
            longitude: lon.parse()?,
        })
    }
}
