// crates/profile/src/application/add_block/mod.rs

mod add_block_command;
mod add_block_use_case;

pub use add_block_command::AddBlockCommand;
pub use add_block_use_case::AddBlockUseCase;
