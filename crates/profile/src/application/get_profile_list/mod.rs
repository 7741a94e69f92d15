// crates/profile/src/application/get_profile_list/mod.rs

mod get_profile_list_command;
mod get_profile_list_use_case;

pub use get_profile_list_command::GetProfileListCommand;
pub use get_profile_list_use_case::GetProfileListUseCase;
