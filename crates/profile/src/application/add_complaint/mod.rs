// crates/profile/src/application/add_complaint/mod.rs

mod add_complaint_command;
mod add_complaint_use_case;

pub use add_complaint_command::AddComplaintCommand;
pub use add_complaint_use_case::AddComplaintUseCase;
