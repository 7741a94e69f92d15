// crates/profile/src/infrastructure/postgres/repositories/postgres_complaint_repository.rs

use crate::domain::entities::Complaint;
use crate::domain::repositories::ComplaintRepository;
use crate::domain::value_objects::ProfileId;
use crate::infrastructure::postgres::rows::PostgresComplaintRow;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::PgPool;

pub struct PostgresComplaintRepository {
    pool: PgPool,
}

impl PostgresComplaintRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComplaintRepository for PostgresComplaintRepository {
    async fn add(
        &self,
        profile_id: ProfileId,
        complained_profile_id: ProfileId,
        reason: &str,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Complaint> {
        let pool = self.pool.clone();
        let reason = reason.to_string();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let row = sqlx::query_as::<_, PostgresComplaintRow>(
                r#"
                INSERT INTO complaints (profile_id, complained_profile_id, reason)
                VALUES ($1, $2, $3)
                RETURNING id, profile_id, complained_profile_id, reason, created_at
                "#,
            )
                .bind(profile_id.value())
                .bind(complained_profile_id.value())
                .bind(&reason)
                .fetch_one(&mut *conn)
                .await
                .map_domain::<Complaint>()?;

            Ok(row.into())
        })).await
    }

    async fn count_against(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<u64> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let count = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM complaints WHERE complained_profile_id = $1",
            )
                .bind(profile_id.value())
                .fetch_one(&mut *conn)
                .await
                .map_domain::<Complaint>()?;

            Ok(count.max(0) as u64)
        })).await
    }
}
