// crates/profile/src/domain/entities/mod.rs

mod filter;
mod identity;
mod image;
mod navigator;
mod profile;
mod purge_job;
mod relations;
mod status;

pub use filter::Filter;
pub use identity::Identity;
pub use image::{Image, NewImage};
pub use navigator::{Navigator, Position};
pub use profile::{age_on, Profile};
pub use purge_job::PurgeJob;
pub use relations::{Block, Complaint, Like};
pub use status::Status;
