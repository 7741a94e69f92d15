// crates/profile/src/application/restore_profile/mod.rs

mod restore_profile_command;
mod restore_profile_use_case;

pub use restore_profile_command::RestoreProfileCommand;
pub use restore_profile_use_case::RestoreProfileUseCase;
