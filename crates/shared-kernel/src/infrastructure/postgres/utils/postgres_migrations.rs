// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_migrations.rs

use sqlx::{Executor, PgPool};

/// Socle commun (PostGIS, trigger updated_at), idempotent
pub async fn run_kernel_postgres_migrations(pool: &PgPool) -> anyhow::Result<()> {
    let schema = include_str!("../../../../migrations/postgres/202601010000_foundation.sql");
    pool.execute(schema).await?;
    tracing::info!("✅ Shared kernel migrations applied");
    Ok(())
}
