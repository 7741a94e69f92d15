// crates/profile/src/infrastructure/postgres/repositories/postgres_image_repository.rs

use crate::domain::entities::{Image, NewImage};
use crate::domain::repositories::ImageRepository;
use crate::domain::value_objects::{ImageId, ProfileId};
use crate::infrastructure::postgres::rows::{PostgresImageRow, IMAGE_COLUMNS};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::PgPool;

const PUBLIC_PREDICATE: &str = "deleted_at IS NULL AND is_blocked = FALSE AND is_private = FALSE";

pub struct PostgresImageRepository {
    pool: PgPool,
}

impl PostgresImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn list_where(
        &self,
        profile_id: ProfileId,
        predicate: &'static str,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Vec<Image>> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!(
                "SELECT {IMAGE_COLUMNS} FROM images WHERE profile_id = $1 AND {predicate} ORDER BY created_at ASC, id ASC"
            );

            let rows = sqlx::query_as::<_, PostgresImageRow>(&sql)
                .bind(profile_id.value())
                .fetch_all(&mut *conn)
                .await
                .map_domain::<Image>()?;

            Ok(rows.into_iter().map(Image::from).collect())
        })).await
    }
}

#[async_trait]
impl ImageRepository for PostgresImageRepository {
    async fn add(&self, image: &NewImage, tx: Option<&mut dyn Transaction>) -> Result<Image> {
        let pool = self.pool.clone();
        let i = image.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!(
                r#"
                INSERT INTO images (profile_id, name, url, size, is_primary, is_private)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING {IMAGE_COLUMNS}
                "#
            );

            let row = sqlx::query_as::<_, PostgresImageRow>(&sql)
                .bind(i.profile_id.value())
                .bind(&i.name)
                .bind(i.url.as_str())
                .bind(i.size)
                .bind(i.is_primary)
                .bind(i.is_private)
                .fetch_one(&mut *conn)
                .await
                .map_domain::<Image>()?;

            Ok(row.into())
        })).await
    }

    async fn find_by_id(&self, id: ImageId, tx: Option<&mut dyn Transaction>) -> Result<Option<Image>> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!("SELECT {IMAGE_COLUMNS} FROM images WHERE id = $1");

            let row = sqlx::query_as::<_, PostgresImageRow>(&sql)
                .bind(id.value())
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Image>()?;

            Ok(row.map(Image::from))
        })).await
    }

    async fn list_all(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Vec<Image>> {
        self.list_where(profile_id, "TRUE", tx).await
    }

    async fn list_active(&self, profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Vec<Image>> {
        self.list_where(profile_id, "deleted_at IS NULL", tx).await
    }

    async fn list_public(&self, profile_id: ProfileId) -> Result<Vec<Image>> {
        self.list_where(profile_id, PUBLIC_PREDICATE, None).await
    }

    async fn last_public(&self, profile_id: ProfileId) -> Result<Option<Image>> {
        let sql = format!(
            r#"
            SELECT {IMAGE_COLUMNS} FROM images
            WHERE profile_id = $1 AND {PUBLIC_PREDICATE}
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#
        );

        let row = sqlx::query_as::<_, PostgresImageRow>(&sql)
            .bind(profile_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_domain::<Image>()?;

        Ok(row.map(Image::from))
    }

    async fn mark_deleted(&self, id: ImageId, at: DateTime<Utc>, tx: Option<&mut dyn Transaction>) -> Result<Image> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!(
                "UPDATE images SET deleted_at = $2 WHERE id = $1 RETURNING {IMAGE_COLUMNS}"
            );

            let row = sqlx::query_as::<_, PostgresImageRow>(&sql)
                .bind(id.value())
                .bind(at)
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Image>()?;

            row.map(Image::from).ok_or_not_found(id)
        })).await
    }
}
