// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_test_context.rs

use crate::infrastructure::postgres::factories::PostgresContext;
use crate::infrastructure::postgres::utils::{run_kernel_postgres_migrations, PostgresTestContextBuilder};
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::path::Path;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres as PostgresImage;

/// Base PostGIS jetable. Le conteneur vit aussi longtemps que le contexte.
pub struct PostgresTestContext {
    context: PostgresContext,
    _container: ContainerAsync<PostgresImage>,
}

impl PostgresTestContext {
    pub fn builder() -> PostgresTestContextBuilder {
        PostgresTestContextBuilder::new()
    }

    pub(crate) async fn restore(builder: PostgresTestContextBuilder) -> Self {
        let container = PostgresImage::default()
            .with_user(&builder.user)
            .with_password(&builder.password)
            .with_db_name(&builder.db_name)
            .with_name(&builder.image_name)
            .with_tag(&builder.image_tag)
            .start()
            .await
            .expect("PostGIS container failed to start");

        let host_port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("PostGIS port not exposed");
        let conn_str = format!(
            "postgres://{}:{}@127.0.0.1:{}/{}",
            builder.user, builder.password, host_port, builder.db_name
        );

        let bootstrap_pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&conn_str)
            .await
            .expect("PostGIS connection failed");

        run_kernel_postgres_migrations(&bootstrap_pool)
            .await
            .expect("Kernel migrations failed");

        for path in &builder.migrations {
            let mut migrator = Migrator::new(Path::new(path))
                .await
                .unwrap_or_else(|e| panic!("Invalid migration path '{path}': {e}"));
            migrator.set_ignore_missing(true);
            migrator
                .run(&bootstrap_pool)
                .await
                .unwrap_or_else(|e| panic!("Migrations from '{path}' failed: {e}"));
        }
        bootstrap_pool.close().await;

        let mut context_builder = PostgresContext::builder_raw().with_url(&conn_str);
        if let Some(config) = builder.config {
            context_builder = context_builder.with_config(config);
        }

        let context = context_builder.build().await.expect("Failed to build context");

        Self {
            context,
            _container: container,
        }
    }

    pub fn pool(&self) -> PgPool {
        self.context.pool()
    }

    pub fn url(&self) -> &str {
        self.context.url()
    }
}
