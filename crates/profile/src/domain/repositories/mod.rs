// crates/profile/src/domain/repositories/mod.rs

mod block_repository;
mod complaint_repository;
mod filter_repository;
mod identity_repository;
mod image_purge_outbox;
mod image_repository;
mod like_repository;
mod navigator_repository;
mod profile_repository;
mod status_repository;

pub use block_repository::BlockRepository;
pub use complaint_repository::ComplaintRepository;
pub use filter_repository::FilterRepository;
pub use identity_repository::IdentityRepository;
pub use image_purge_outbox::ImagePurgeOutbox;
pub use image_repository::ImageRepository;
pub use like_repository::LikeRepository;
pub use navigator_repository::NavigatorRepository;
pub use profile_repository::ProfileRepository;
pub use status_repository::StatusRepository;
