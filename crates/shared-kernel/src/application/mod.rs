// crates/shared-kernel/src/application/mod.rs

mod pagination;

pub use pagination::{PageRequest, PageResponse, Pagination};
