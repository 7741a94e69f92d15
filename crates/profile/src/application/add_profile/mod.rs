// crates/profile/src/application/add_profile/mod.rs

mod add_profile_command;
mod add_profile_use_case;

pub use add_profile_command::{AddProfileCommand, IdentityInput};
pub use add_profile_use_case::AddProfileUseCase;
