// crates/profile/src/infrastructure/postgres/repositories/postgres_identity_repository.rs

use crate::domain::entities::Identity;
use crate::domain::params::IdentityPatch;
use crate::domain::repositories::IdentityRepository;
use crate::domain::value_objects::ProfileId;
use crate::infrastructure::postgres::rows::{PostgresIdentityRow, IDENTITY_COLUMNS};
use async_trait::async_trait;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::PgPool;

pub struct PostgresIdentityRepository {
    pool: PgPool,
}

impl PostgresIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityRepository for PostgresIdentityRepository {
    async fn add(&self, identity: &Identity, tx: Option<&mut dyn Transaction>) -> Result<Identity> {
        let pool = self.pool.clone();
        let i = identity.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!(
                r#"
                INSERT INTO identities (
                    profile_id, external_id, username, first_name, last_name,
                    language_code, allows_write_to_pm, created_at, updated_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING {IDENTITY_COLUMNS}
                "#
            );

            let row = sqlx::query_as::<_, PostgresIdentityRow>(&sql)
                .bind(i.profile_id.value())
                .bind(i.external_id)
                .bind(i.username.as_deref())
                .bind(i.first_name.as_deref())
                .bind(i.last_name.as_deref())
                .bind(i.language_code.as_deref())
                .bind(i.allows_write_to_pm)
                .bind(i.created_at)
                .bind(i.updated_at)
                .fetch_one(&mut *conn)
                .await
                .map_domain::<Identity>()?;

            Ok(row.into())
        })).await
    }

    async fn update(&self, profile_id: ProfileId, patch: &IdentityPatch, tx: Option<&mut dyn Transaction>) -> Result<Identity> {
        let pool = self.pool.clone();
        let patch = patch.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!(
                r#"
                UPDATE identities SET
                    username = CASE WHEN $2 THEN $3 ELSE username END,
                    first_name = CASE WHEN $4 THEN $5 ELSE first_name END,
                    last_name = CASE WHEN $6 THEN $7 ELSE last_name END,
                    language_code = CASE WHEN $8 THEN $9 ELSE language_code END,
                    allows_write_to_pm = COALESCE($10, allows_write_to_pm)
                WHERE profile_id = $1
                RETURNING {IDENTITY_COLUMNS}
                "#
            );

            let row = sqlx::query_as::<_, PostgresIdentityRow>(&sql)
                .bind(profile_id.value())
                .bind(patch.username.is_some())
                .bind(patch.username.clone().flatten())
                .bind(patch.first_name.is_some())
                .bind(patch.first_name.clone().flatten())
                .bind(patch.last_name.is_some())
                .bind(patch.last_name.clone().flatten())
                .bind(patch.language_code.is_some())
                .bind(patch.language_code.clone().flatten())
                .bind(patch.allows_write_to_pm)
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Identity>()?;

            row.map(Identity::from).ok_or_not_found(profile_id)
        })).await
    }

    async fn find_by_profile_id(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Identity>> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!("SELECT {IDENTITY_COLUMNS} FROM identities WHERE profile_id = $1");

            let row = sqlx::query_as::<_, PostgresIdentityRow>(&sql)
                .bind(profile_id.value())
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Identity>()?;

            Ok(row.map(Identity::from))
        })).await
    }
}
