// crates/profile/src/application/update_coordinates/mod.rs

mod update_coordinates_command;
mod update_coordinates_use_case;

pub use update_coordinates_command::UpdateCoordinatesCommand;
pub use update_coordinates_use_case::UpdateCoordinatesUseCase;
