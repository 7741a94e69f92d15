// crates/shared-kernel/src/domain/transaction/transaction_manager.rs

use crate::domain::transaction::Transaction;
use crate::errors::Result;
use std::future::Future;
use std::pin::Pin;

pub trait TransactionManager: Send + Sync {
    /// Ouvre une transaction et réserve une connexion jusqu'à sa finalisation
    fn begin<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<Box<dyn Transaction>>> + Send + 'a>>;
}
