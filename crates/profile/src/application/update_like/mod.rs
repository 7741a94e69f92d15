// crates/profile/src/application/update_like/mod.rs

mod update_like_command;
mod update_like_use_case;

pub use update_like_command::UpdateLikeCommand;
pub use update_like_use_case::UpdateLikeUseCase;
