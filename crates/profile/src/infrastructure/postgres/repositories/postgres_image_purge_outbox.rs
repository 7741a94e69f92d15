// crates/profile/src/infrastructure/postgres/repositories/postgres_image_purge_outbox.rs

use crate::domain::entities::PurgeJob;
use crate::domain::repositories::ImagePurgeOutbox;
use crate::infrastructure::postgres::rows::PostgresPurgeJobRow;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresImagePurgeOutbox {
    pool: PgPool,
    /// Durée de réservation d'un job par un worker
    lease_seconds: i64,
}

impl PostgresImagePurgeOutbox {
    pub const DEFAULT_LEASE_SECONDS: i64 = 60;

    pub fn new(pool: PgPool) -> Self {
        Self { pool, lease_seconds: Self::DEFAULT_LEASE_SECONDS }
    }
}

#[async_trait]
impl ImagePurgeOutbox for PostgresImagePurgeOutbox {
    async fn enqueue(&self, jobs: &[PurgeJob], tx: Option<&mut dyn Transaction>) -> Result<()> {
        if jobs.is_empty() {
            return Ok(());
        }

        let pool = self.pool.clone();
        let ids: Vec<Uuid> = jobs.iter().map(|j| j.id).collect();
        let paths: Vec<String> = jobs.iter().map(|j| j.path.clone()).collect();
        let created_at: Vec<_> = jobs.iter().map(|j| j.created_at).collect();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            sqlx::query(
                r#"
                INSERT INTO image_purge_outbox (id, path, created_at)
                SELECT * FROM UNNEST($1::uuid[], $2::text[], $3::timestamptz[])
                ON CONFLICT (id) DO NOTHING
                "#,
            )
                .bind(&ids)
                .bind(&paths)
                .bind(&created_at)
                .execute(&mut *conn)
                .await
                .map_domain_infra("PurgeOutboxEnqueue")?;

            Ok(())
        })).await
    }

    async fn fetch_unprocessed(&self, limit: u32, max_attempts: i32) -> Result<Vec<PurgeJob>> {
        // Réservation atomique : deux workers ne reçoivent jamais le même job pendant le bail
        let sql = r#"
            UPDATE image_purge_outbox
            SET locked_until = NOW() + make_interval(secs => $3)
            WHERE id IN (
                SELECT id FROM image_purge_outbox
                WHERE processed_at IS NULL
                  AND attempts < $2
                  AND (locked_until IS NULL OR locked_until < NOW())
                ORDER BY created_at ASC
                LIMIT $1
                FOR UPDATE SKIP LOCKED
            )
            RETURNING id, path, attempts, created_at
        "#;

        let mut rows = sqlx::query_as::<_, PostgresPurgeJobRow>(sql)
            .bind(limit as i64)
            .bind(max_attempts)
            .bind(self.lease_seconds as f64)
            .fetch_all(&self.pool)
            .await
            .map_domain_infra("PurgeOutboxFetch")?;

        rows.sort_by_key(|r| r.created_at);
        Ok(rows.into_iter().map(PurgeJob::from).collect())
    }

    async fn mark_as_processed(&self, ids: &[Uuid]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            "UPDATE image_purge_outbox SET processed_at = NOW(), locked_until = NULL WHERE id = ANY($1)",
        )
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_domain_infra("PurgeOutboxProcessed")?;

        Ok(())
    }

    async fn mark_as_failed(&self, id: Uuid, last_error: String) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE image_purge_outbox
            SET attempts = attempts + 1, last_error = $2, locked_until = NULL
            WHERE id = $1
            "#,
        )
            .bind(id)
            .bind(last_error)
            .execute(&self.pool)
            .await
            .map_domain_infra("PurgeOutboxFailed")?;

        Ok(())
    }
}
