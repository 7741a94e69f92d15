// crates/profile/src/infrastructure/postgres/repositories/postgres_filter_repository.rs

use crate::domain::entities::Filter;
use crate::domain::params::FilterPatch;
use crate::domain::repositories::FilterRepository;
use crate::domain::value_objects::ProfileId;
use crate::infrastructure::postgres::rows::{PostgresFilterRow, FILTER_COLUMNS};
use async_trait::async_trait;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::PgPool;

pub struct PostgresFilterRepository {
    pool: PgPool,
}

impl PostgresFilterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FilterRepository for PostgresFilterRepository {
    async fn add(&self, filter: &Filter, tx: Option<&mut dyn Transaction>) -> Result<Filter> {
        let pool = self.pool.clone();
        let f = filter.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!(
                r#"
                INSERT INTO filters (
                    profile_id, search_gender, age_from, age_to, distance,
                    page, size, created_at, updated_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING {FILTER_COLUMNS}
                "#
            );

            let row = sqlx::query_as::<_, PostgresFilterRow>(&sql)
                .bind(f.profile_id.value())
                .bind(f.search_gender.as_str())
                .bind(f.age_range.from() as i16)
                .bind(f.age_range.to() as i16)
                .bind(f.distance.km())
                .bind(f.page as i32)
                .bind(f.size as i32)
                .bind(f.created_at)
                .bind(f.updated_at)
                .fetch_one(&mut *conn)
                .await
                .map_domain::<Filter>()?;

            row.try_into()
        })).await
    }

    async fn update(&self, profile_id: ProfileId, patch: &FilterPatch, tx: Option<&mut dyn Transaction>) -> Result<Filter> {
        let pool = self.pool.clone();
        let patch = patch.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!(
                r#"
                UPDATE filters SET
                    search_gender = COALESCE($2, search_gender),
                    age_from = COALESCE($3, age_from),
                    age_to = COALESCE($4, age_to),
                    distance = COALESCE($5, distance),
                    page = COALESCE($6, page),
                    size = COALESCE($7, size)
                WHERE profile_id = $1
                RETURNING {FILTER_COLUMNS}
                "#
            );

            let row = sqlx::query_as::<_, PostgresFilterRow>(&sql)
                .bind(profile_id.value())
                .bind(patch.search_gender.map(|g| g.as_str()))
                .bind(patch.age_range.map(|r| r.from() as i16))
                .bind(patch.age_range.map(|r| r.to() as i16))
                .bind(patch.distance.map(|d| d.km()))
                .bind(patch.page.map(|p| p as i32))
                .bind(patch.size.map(|s| s as i32))
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Filter>()?;

            row.map(Filter::try_from).transpose()?.ok_or_not_found(profile_id)
        })).await
    }

    async fn find_by_profile_id(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Filter>> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!("SELECT {FILTER_COLUMNS} FROM filters WHERE profile_id = $1");

            let row = sqlx::query_as::<_, PostgresFilterRow>(&sql)
                .bind(profile_id.value())
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Filter>()?;

            row.map(Filter::try_from).transpose()
        })).await
    }
}
