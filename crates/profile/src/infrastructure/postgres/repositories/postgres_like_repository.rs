// crates/profile/src/infrastructure/postgres/repositories/postgres_like_repository.rs

use crate::domain::entities::Like;
use crate::domain::repositories::LikeRepository;
use crate::domain::value_objects::{LikeId, ProfileId};
use crate::infrastructure::postgres::rows::PostgresLikeRow;
use async_trait::async_trait;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::PgPool;

const LIKE_COLUMNS: &str = "id, profile_id, liked_profile_id, is_liked, created_at, updated_at";

pub struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn add(&self, profile_id: ProfileId, liked_profile_id: ProfileId, tx: Option<&mut dyn Transaction>) -> Result<Like> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            // 23505 sur likes_profile_id_liked_profile_id_key => AlreadyExists
            let sql = format!(
                "INSERT INTO likes (profile_id, liked_profile_id, is_liked) VALUES ($1, $2, TRUE) RETURNING {LIKE_COLUMNS}"
            );

            let row = sqlx::query_as::<_, PostgresLikeRow>(&sql)
                .bind(profile_id.value())
                .bind(liked_profile_id.value())
                .fetch_one(&mut *conn)
                .await
                .map_domain::<Like>()?;

            Ok(row.into())
        })).await
    }

    async fn update(&self, id: LikeId, is_liked: bool, tx: Option<&mut dyn Transaction>) -> Result<Like> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!("UPDATE likes SET is_liked = $2 WHERE id = $1 RETURNING {LIKE_COLUMNS}");

            let row = sqlx::query_as::<_, PostgresLikeRow>(&sql)
                .bind(id.value())
                .bind(is_liked)
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Like>()?;

            row.map(Like::from).ok_or_not_found(id)
        })).await
    }

    async fn find_by_id(&self, id: LikeId, tx: Option<&mut dyn Transaction>) -> Result<Option<Like>> {
        let pool = self.pool.clone();

        <dyn Transaction>::execute_on(&pool, tx, |conn| Box::pin(async move {
            let sql = format!("SELECT {LIKE_COLUMNS} FROM likes WHERE id = $1");

            let row = sqlx::query_as::<_, PostgresLikeRow>(&sql)
                .bind(id.value())
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Like>()?;

            Ok(row.map(Like::from))
        })).await
    }

    async fn find_by_pair(&self, profile_id: ProfileId, liked_profile_id: ProfileId) -> Result<Option<Like>> {
        let sql = format!("SELECT {LIKE_COLUMNS} FROM likes WHERE profile_id = $1 AND liked_profile_id = $2");

        let row = sqlx::query_as::<_, PostgresLikeRow>(&sql)
            .bind(profile_id.value())
            .bind(liked_profile_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_domain::<Like>()?;

        Ok(row.map(Like::from))
    }
}
