// crates/profile/src/domain/value_objects/mod.rs

mod age_range;
mod display_name;
mod gender;
mod profile_id;
mod record_id;
mod search_radius;

pub use age_range::AgeRange;
pub use display_name::DisplayName;
pub use gender::{Gender, SearchGender};
pub use profile_id::ProfileId;
pub use record_id::{BlockId, ComplaintId, ImageId, LikeId};
pub use search_radius::SearchRadius;
