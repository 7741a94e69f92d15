// crates/profile/src/domain/mod.rs

pub mod builders;
pub mod entities;
pub mod models;
pub mod params;
pub mod repositories;
pub mod unit_of_work;
pub mod value_objects;
