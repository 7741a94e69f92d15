// crates/profile/src/application/get_profile_short_info/mod.rs

mod get_profile_short_info_command;
mod get_profile_short_info_dto;
mod get_profile_short_info_use_case;

pub use get_profile_short_info_command::GetProfileShortInfoCommand;
pub use get_profile_short_info_dto::ProfileShortInfoDto;
pub use get_profile_short_info_use_case::GetProfileShortInfoUseCase;
