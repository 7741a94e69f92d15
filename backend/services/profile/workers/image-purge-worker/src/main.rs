// backend/services/profile/workers/image-purge-worker/src/main.rs

use profile::application::profile_settings::ProfileSettings;
use profile::application::workers::ImagePurgeProcessor;
use profile::infrastructure::object_store::{DiskObjectStore, DiskObjectStoreConfig};
use profile::infrastructure::postgres::postgres_repositories;
use profile::infrastructure::postgres::utils::run_postgres_migrations;
use shared_kernel::clock::SystemClock;
use shared_kernel::infrastructure::postgres::factories::PostgresContext;
use shared_kernel::infrastructure::telemetry::init_tracing;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing("info,sqlx=warn");

    tracing::info!("🧹 Starting image purge worker");

    // 1. Infrastructure
    let db = PostgresContext::builder("PROFILE")?.build().await?;
    run_postgres_migrations(&db.pool()).await?;

    let settings = ProfileSettings::from_env();
    let object_store = Arc::new(DiskObjectStore::new(DiskObjectStoreConfig::from_env()?));
    let repositories = postgres_repositories(db.pool(), Arc::new(SystemClock));

    let processor = ImagePurgeProcessor::new(
        repositories.purge_outbox,
        object_store,
        settings.purge_batch_size,
        settings.purge_polling_interval,
        settings.purge_max_attempts,
    );

    // 2. Arrêt propre sur Ctrl+C
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("🛑 Shutdown signal received, stopping purge worker...");
                let _ = shutdown_tx.send(true);
            }
            Err(error) => tracing::error!(%error, "❌ Unable to listen for shutdown signal"),
        }
    });

    tracing::info!(
        batch_size = settings.purge_batch_size,
        interval_ms = settings.purge_polling_interval.as_millis() as u64,
        max_attempts = settings.purge_max_attempts,
        "✅ Purge worker configured"
    );

    processor.run(shutdown_rx).await;

    tracing::info!("👋 Image purge worker exited clean");
    Ok(())
}
