// crates/profile/src/infrastructure/postgres/rows/mod.rs

mod postgres_filter_row;
mod postgres_identity_row;
mod postgres_image_row;
mod postgres_navigator_row;
mod postgres_profile_list_row;
mod postgres_profile_row;
mod postgres_purge_job_row;
mod postgres_relation_rows;
mod postgres_status_row;

pub(crate) use postgres_filter_row::FILTER_COLUMNS;
pub(crate) use postgres_identity_row::IDENTITY_COLUMNS;
pub(crate) use postgres_image_row::IMAGE_COLUMNS;
pub(crate) use postgres_navigator_row::NAVIGATOR_COLUMNS;
pub(crate) use postgres_profile_row::PROFILE_COLUMNS;
pub(crate) use postgres_status_row::STATUS_COLUMNS;

pub use postgres_filter_row::PostgresFilterRow;
pub use postgres_identity_row::PostgresIdentityRow;
pub use postgres_image_row::PostgresImageRow;
pub use postgres_navigator_row::PostgresNavigatorRow;
pub use postgres_profile_list_row::PostgresProfileListRow;
pub use postgres_profile_row::PostgresProfileRow;
pub use postgres_purge_job_row::PostgresPurgeJobRow;
pub use postgres_relation_rows::{PostgresBlockRow, PostgresComplaintRow, PostgresLikeRow};
pub use postgres_status_row::PostgresStatusRow;
