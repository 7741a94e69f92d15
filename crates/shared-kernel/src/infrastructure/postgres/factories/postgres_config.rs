// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_config.rs

use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct PostgresConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
}

impl PostgresConfig {
    pub fn new(max_connections: u32, min_connections: u32, acquire_timeout: Duration) -> Self {
        Self {
            max_connections,
            min_connections,
            acquire_timeout,
        }
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self::new(10, 2, Duration::from_secs(3))
    }
}
