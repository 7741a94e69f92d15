// crates/profile/src/application/common/mod.rs

mod activity_tracker;
mod image_upload;
mod navigator_upsert;
mod profile_guard;

pub use activity_tracker::ActivityTracker;
pub use image_upload::ImageUpload;
pub use navigator_upsert::upsert_navigator;
pub use profile_guard::ProfileGuard;
