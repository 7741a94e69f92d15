// crates/profile/src/infrastructure/postgres/repositories/postgres_navigator_repository.rs

use crate::domain::entities::Navigator;
use crate::domain::repositories::NavigatorRepository;
use crate::domain::value_objects::ProfileId;
use crate::infrastructure::postgres::rows::{PostgresNavigatorRow, NAVIGATOR_COLUMNS};
use async_trait::async_trait;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::PgPool;

pub struct PostgresNavigatorRepository {
    pool: PgPool,
}

impl PostgresNavigatorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NavigatorRepository for PostgresNavigatorRepository {
    async fn add(&self, navigator: &Navigator, tx: Option<&mut dyn Transaction>) -> Result<Navigator> {
        let pool = self.pool.clone();
        let n = navigator.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!(
                r#"
                INSERT INTO navigators (profile_id, location, country_code, created_at, updated_at)
                VALUES ($1, ST_SetSRID(ST_MakePoint($2, $3), 4326)::geography, $4, $5, $6)
                RETURNING {NAVIGATOR_COLUMNS}
                "#
            );

            let row = sqlx::query_as::<_, PostgresNavigatorRow>(&sql)
                .bind(n.profile_id.value())
                .bind(n.point.lon())
                .bind(n.point.lat())
                .bind(n.country_code.as_ref().map(|c| c.as_str().to_string()))
                .bind(n.created_at)
                .bind(n.updated_at)
                .fetch_one(&mut *conn)
                .await
                .map_domain::<Navigator>()?;

            Ok(row.into())
        })).await
    }

    async fn update(&self, navigator: &Navigator, tx: Option<&mut dyn Transaction>) -> Result<Navigator> {
        let pool = self.pool.clone();
        let n = navigator.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!(
                r#"
                UPDATE navigators SET
                    location = ST_SetSRID(ST_MakePoint($2, $3), 4326)::geography,
                    country_code = $4
                WHERE profile_id = $1
                RETURNING {NAVIGATOR_COLUMNS}
                "#
            );

            let row = sqlx::query_as::<_, PostgresNavigatorRow>(&sql)
                .bind(n.profile_id.value())
                .bind(n.point.lon())
                .bind(n.point.lat())
                .bind(n.country_code.as_ref().map(|c| c.as_str().to_string()))
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Navigator>()?;

            row.map(Navigator::from).ok_or_not_found(n.profile_id)
        })).await
    }

    async fn exists(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<bool> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM navigators WHERE profile_id = $1)")
                .bind(profile_id.value())
                .fetch_one(&mut *conn)
                .await
                .map_domain::<Navigator>()
        })).await
    }

    async fn find_by_profile_id(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Option<Navigator>> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!("SELECT {NAVIGATOR_COLUMNS} FROM navigators WHERE profile_id = $1");

            let row = sqlx::query_as::<_, PostgresNavigatorRow>(&sql)
                .bind(profile_id.value())
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Navigator>()?;

            Ok(row.map(Navigator::from))
        })).await
    }

    async fn distance_between(&self, from: ProfileId, to: ProfileId) -> Result<Option<f64>> {
        // Sphère (use_spheroid = false), cohérent avec la recherche de proximité
        let sql = r#"
            SELECT ST_Distance(a.location, b.location, false)
            FROM navigators a, navigators b
            WHERE a.profile_id = $1 AND b.profile_id = $2
        "#;

        sqlx::query_scalar::<_, f64>(sql)
            .bind(from.value())
            .bind(to.value())
            .fetch_optional(&self.pool)
            .await
            .map_domain_infra("NavigatorDistance")
    }
}
