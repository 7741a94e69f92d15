// crates/profile/src/application/freeze_profile/mod.rs

mod freeze_profile_command;
mod freeze_profile_use_case;

pub use freeze_profile_command::FreezeProfileCommand;
pub use freeze_profile_use_case::FreezeProfileUseCase;
