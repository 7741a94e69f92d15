// crates/profile/src/application/delete_image/mod.rs

mod delete_image_command;
mod delete_image_use_case;

pub use delete_image_command::DeleteImageCommand;
pub use delete_image_use_case::DeleteImageUseCase;
