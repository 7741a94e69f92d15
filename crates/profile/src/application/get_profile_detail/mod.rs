// crates/profile/src/application/get_profile_detail/mod.rs

mod get_profile_detail_command;
mod get_profile_detail_dto;
mod get_profile_detail_use_case;

pub use get_profile_detail_command::GetProfileDetailCommand;
pub use get_profile_detail_dto::{ProfileDetailDto, ProfileImageDto, ViewerLikeDto};
pub use get_profile_detail_use_case::GetProfileDetailUseCase;
