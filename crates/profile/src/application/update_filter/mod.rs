// crates/profile/src/application/update_filter/mod.rs

mod update_filter_command;
mod update_filter_use_case;

pub use update_filter_command::UpdateFilterCommand;
pub use update_filter_use_case::UpdateFilterUseCase;
