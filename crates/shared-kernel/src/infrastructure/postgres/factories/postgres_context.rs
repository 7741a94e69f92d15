// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_context.rs

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::postgres::factories::{PostgresConfig, PostgresContextBuilder};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub struct PostgresContext {
    pool: PgPool,
    url: String,
    config: PostgresConfig,
}

impl PostgresContext {
    pub fn builder(prefix: &str) -> AppResult<PostgresContextBuilder> {
        PostgresContextBuilder::from_env(prefix)
    }

    pub fn builder_raw() -> PostgresContextBuilder {
        PostgresContextBuilder::default()
    }

    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> PostgresConfig {
        self.config
    }

    pub(crate) async fn restore(builder: PostgresContextBuilder) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(builder.config.max_connections)
            .min_connections(builder.config.min_connections)
            .acquire_timeout(builder.config.acquire_timeout)
            .connect(&builder.url)
            .await
            .map_err(|e| {
                AppError::new(ErrorCode::InternalError, format!("Postgres connection failed: {e}"))
            })?;

        tracing::info!(
            max_connections = builder.config.max_connections,
            "🐘 Postgres pool ready"
        );

        Ok(Self {
            pool,
            url: builder.url,
            config: builder.config,
        })
    }
}
