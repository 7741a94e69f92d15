// crates/profile/src/infrastructure/postgres/repositories/postgres_block_repository.rs

use crate::domain::entities::Block;
use crate::domain::repositories::BlockRepository;
use crate::domain::value_objects::ProfileId;
use crate::infrastructure::postgres::rows::PostgresBlockRow;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::PgPool;

pub struct PostgresBlockRepository {
    pool: PgPool,
}

impl PostgresBlockRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlockRepository for PostgresBlockRepository {
    async fn add(&self, profile_id: ProfileId, blocked_profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Block> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            sqlx::query(
                r#"
                INSERT INTO blocks (profile_id, blocked_profile_id)
                VALUES ($1, $2)
                ON CONFLICT ON CONSTRAINT blocks_profile_id_blocked_profile_id_key DO NOTHING
                "#,
            )
                .bind(profile_id.value())
                .bind(blocked_profile_id.value())
                .execute(&mut *conn)
                .await
                .map_domain::<Block>()?;

            // Ligne neuve ou déjà présente : même lecture
            let row = sqlx::query_as::<_, PostgresBlockRow>(
                r#"
                SELECT id, profile_id, blocked_profile_id, created_at
                FROM blocks
                WHERE profile_id = $1 AND blocked_profile_id = $2
                "#,
            )
                .bind(profile_id.value())
                .bind(blocked_profile_id.value())
                .fetch_one(&mut *conn)
                .await
                .map_domain::<Block>()?;

            Ok(row.into())
        })).await
    }

    async fn exists(&self, profile_id: ProfileId, blocked_profile_id: ProfileId) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM blocks WHERE profile_id = $1 AND blocked_profile_id = $2)",
        )
            .bind(profile_id.value())
            .bind(blocked_profile_id.value())
            .fetch_one(&self.pool)
            .await
            .map_domain_infra("BlockExists")
    }
}
