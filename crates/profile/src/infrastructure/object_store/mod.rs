// crates/profile/src/infrastructure/object_store/mod.rs

mod disk_object_store;

pub use disk_object_store::{DiskObjectStore, DiskObjectStoreConfig};
