// crates/profile/src/infrastructure/mod.rs

pub mod notifier;
pub mod object_store;
pub mod postgres;
