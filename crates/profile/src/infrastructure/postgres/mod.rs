// crates/profile/src/infrastructure/postgres/mod.rs

mod postgres_repositories;
pub mod repositories;
pub mod rows;
pub mod utils;

pub use postgres_repositories::{postgres_repositories, postgres_unit_of_work_factory};
