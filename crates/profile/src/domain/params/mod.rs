// crates/profile/src/domain/params/mod.rs

mod filter_patch;
mod identity_patch;
mod profile_patch;
mod status_patch;

pub use filter_patch::FilterPatch;
pub use identity_patch::IdentityPatch;
pub use profile_patch::ProfilePatch;
pub use status_patch::StatusPatch;
