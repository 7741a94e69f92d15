// crates/shared-kernel/src/infrastructure/postgres/transactions/postgres_transaction_manager.rs

use crate::domain::transaction::{Transaction, TransactionManager};
use crate::errors::Result;
use crate::infrastructure::postgres::mappers::SqlxErrorExt;
use crate::infrastructure::postgres::transactions::PostgresTransaction;
use sqlx::PgPool;
use std::future::Future;
use std::pin::Pin;

pub struct PostgresTransactionManager {
    pool: PgPool,
}

impl PostgresTransactionManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TransactionManager for PostgresTransactionManager {
    fn begin<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<Box<dyn Transaction>>> + Send + 'a>> {
        Box::pin(async move {
            let tx = self.pool.begin().await.map_domain_infra("Failed to begin transaction")?;
            Ok(Box::new(PostgresTransaction::new(tx)) as Box<dyn Transaction>)
        })
    }
}
