// crates/profile/src/infrastructure/postgres/postgres_repositories.rs

use crate::domain::unit_of_work::{ProfileRepositories, UnitOfWorkFactory};
use crate::infrastructure::postgres::repositories::{
    PostgresBlockRepository, PostgresComplaintRepository, PostgresFilterRepository,
    PostgresIdentityRepository, PostgresImagePurgeOutbox, PostgresImageRepository,
    PostgresLikeRepository, PostgresNavigatorRepository, PostgresProfileRepository,
    PostgresStatusRepository,
};
use shared_kernel::clock::Clock;
use shared_kernel::infrastructure::postgres::transactions::PostgresTransactionManager;
use sqlx::PgPool;
use std::sync::Arc;

/// Câblage Postgres des dix repositories sur un même pool
pub fn postgres_repositories(pool: PgPool, clock: Arc<dyn Clock>) -> ProfileRepositories {
    ProfileRepositories {
        profiles: Arc::new(PostgresProfileRepository::new(pool.clone(), clock)),
        navigators: Arc::new(PostgresNavigatorRepository::new(pool.clone())),
        filters: Arc::new(PostgresFilterRepository::new(pool.clone())),
        identities: Arc::new(PostgresIdentityRepository::new(pool.clone())),
        statuses: Arc::new(PostgresStatusRepository::new(pool.clone())),
        images: Arc::new(PostgresImageRepository::new(pool.clone())),
        blocks: Arc::new(PostgresBlockRepository::new(pool.clone())),
        likes: Arc::new(PostgresLikeRepository::new(pool.clone())),
        complaints: Arc::new(PostgresComplaintRepository::new(pool.clone())),
        purge_outbox: Arc::new(PostgresImagePurgeOutbox::new(pool)),
    }
}

pub fn postgres_unit_of_work_factory(pool: PgPool, clock: Arc<dyn Clock>) -> UnitOfWorkFactory {
    let tx_manager = Arc::new(PostgresTransactionManager::new(pool.clone()));
    UnitOfWorkFactory::new(tx_manager, postgres_repositories(pool, clock))
}
