// crates/profile/src/infrastructure/postgres/repositories/mod.rs

mod postgres_block_repository;
mod postgres_complaint_repository;
mod postgres_filter_repository;
mod postgres_identity_repository;
mod postgres_image_purge_outbox;
mod postgres_image_repository;
mod postgres_like_repository;
mod postgres_navigator_repository;
mod postgres_profile_repository;
mod postgres_status_repository;

pub use postgres_block_repository::PostgresBlockRepository;
pub use postgres_complaint_repository::PostgresComplaintRepository;
pub use postgres_filter_repository::PostgresFilterRepository;
pub use postgres_identity_repository::PostgresIdentityRepository;
pub use postgres_image_purge_outbox::PostgresImagePurgeOutbox;
pub use postgres_image_repository::PostgresImageRepository;
pub use postgres_like_repository::PostgresLikeRepository;
pub use postgres_navigator_repository::PostgresNavigatorRepository;
pub use postgres_profile_repository::PostgresProfileRepository;
pub use postgres_status_repository::PostgresStatusRepository;
