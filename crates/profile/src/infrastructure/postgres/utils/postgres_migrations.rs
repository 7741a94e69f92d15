// crates/profile/src/infrastructure/postgres/utils/postgres_migrations.rs

use shared_kernel::infrastructure::postgres::utils::run_kernel_postgres_migrations;

/// Socle du kernel (PostGIS, trigger updated_at) puis schéma profil
pub async fn run_postgres_migrations(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    run_kernel_postgres_migrations(pool).await?;

    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await?;

    tracing::info!("✅ Profile migrations applied");
    Ok(())
}
