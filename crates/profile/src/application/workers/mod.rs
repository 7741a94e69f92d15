// crates/profile/src/application/workers/mod.rs

mod image_purge_processor;

pub use image_purge_processor::ImagePurgeProcessor;
