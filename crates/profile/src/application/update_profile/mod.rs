// crates/profile/src/application/update_profile/mod.rs

mod update_profile_command;
mod update_profile_use_case;

pub use update_profile_command::UpdateProfileCommand;
pub use update_profile_use_case::UpdateProfileUseCase;
