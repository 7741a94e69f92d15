// crates/shared-kernel/src/infrastructure/telemetry.rs

use tracing_subscriber::EnvFilter;

/// Subscriber `fmt` piloté par `RUST_LOG`, `info` par défaut.
/// Sans effet si un subscriber global est déjà installé.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
