// crates/profile/src/application/delete_profile/mod.rs

mod delete_profile_command;
mod delete_profile_use_case;

pub use delete_profile_command::DeleteProfileCommand;
pub use delete_profile_use_case::DeleteProfileUseCase;
