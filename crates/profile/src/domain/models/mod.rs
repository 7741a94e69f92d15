// crates/profile/src/domain/models/mod.rs

mod profile_aggregate;
mod profile_list;

pub use profile_aggregate::ProfileAggregate;
pub use profile_list::{ProfileListItem, ProfileListQuery};
