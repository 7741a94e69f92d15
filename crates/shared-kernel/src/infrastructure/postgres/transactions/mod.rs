// crates/shared-kernel/src/infrastructure/postgres/transactions/mod.rs

mod postgres_transaction;
mod postgres_transaction_manager;

pub use postgres_transaction::{PostgresTransaction, TransactionExt};
pub use postgres_transaction_manager::PostgresTransactionManager;
