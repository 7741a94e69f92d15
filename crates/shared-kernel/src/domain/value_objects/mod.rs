// crates/shared-kernel/src/domain/value_objects/mod.rs

mod country_code;
mod geo_point;
mod latitude;
mod longitude;
mod url;
mod value_object;

pub use country_code::CountryCode;
pub use geo_point::GeoPoint;
pub use latitude::Latitude;
pub use longitude::Longitude;
pub use url::Url;
pub use value_object::ValueObject;
