// crates/profile/src/infrastructure/postgres/repositories/postgres_status_repository.rs

use crate::domain::entities::Status;
use crate::domain::params::StatusPatch;
use crate::domain::repositories::StatusRepository;
use crate::domain::value_objects::ProfileId;
use crate::infrastructure::postgres::rows::{PostgresStatusRow, STATUS_COLUMNS};
use async_trait::async_trait;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::PgPool;

pub struct PostgresStatusRepository {
    pool: PgPool,
}

impl PostgresStatusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusRepository for PostgresStatusRepository {
    async fn add(&self, status: &Status, tx: Option<&mut dyn Transaction>) -> Result<Status> {
        let pool = self.pool.clone();
        let s = status.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!(
                r#"
                INSERT INTO statuses (
                    profile_id, is_frozen, is_blocked, is_premium, is_show_distance,
                    is_invisible, is_left_hand, created_at, updated_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING {STATUS_COLUMNS}
                "#
            );

            let row = sqlx::query_as::<_, PostgresStatusRow>(&sql)
                .bind(s.profile_id.value())
                .bind(s.is_frozen)
                .bind(s.is_blocked)
                .bind(s.is_premium)
                .bind(s.is_show_distance)
                .bind(s.is_invisible)
                .bind(s.is_left_hand)
                .bind(s.created_at)
                .bind(s.updated_at)
                .fetch_one(&mut *conn)
                .await
                .map_domain::<Status>()?;

            Ok(row.into())
        })).await
    }

    async fn update(&self, profile_id: ProfileId, patch: &StatusPatch, tx: Option<&mut dyn Transaction>) -> Result<Status> {
        let pool = self.pool.clone();
        let patch = *patch;

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            // Une colonne par drapeau : deux mises à jour concurrentes sur des drapeaux différents ne s'écrasent pas
            let sql = format!(
                r#"
                UPDATE statuses SET
                    is_frozen = COALESCE($2, is_frozen),
                    is_blocked = COALESCE($3, is_blocked),
                    is_premium = COALESCE($4, is_premium),
                    is_show_distance = COALESCE($5, is_show_distance),
                    is_invisible = COALESCE($6, is_invisible),
                    is_left_hand = COALESCE($7, is_left_hand)
                WHERE profile_id = $1
                RETURNING {STATUS_COLUMNS}
                "#
            );

            let row = sqlx::query_as::<_, PostgresStatusRow>(&sql)
                .bind(profile_id.value())
                .bind(patch.is_frozen)
                .bind(patch.is_blocked)
                .bind(patch.is_premium)
                .bind(patch.is_show_distance)
                .bind(patch.is_invisible)
                .bind(patch.is_left_hand)
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Status>()?;

            row.map(Status::from).ok_or_not_found(profile_id)
        })).await
    }

    async fn find_by_profile_id(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Status>> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!("SELECT {STATUS_COLUMNS} FROM statuses WHERE profile_id = $1");

            let row = sqlx::query_as::<_, PostgresStatusRow>(&sql)
                .bind(profile_id.value())
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Status>()?;

            Ok(row.map(Status::from))
        })).await
    }
}
