// crates/profile/src/domain/unit_of_work/unit_of_work_factory.rs

use crate::domain::unit_of_work::{ProfileRepositories, UnitOfWork};
use shared_kernel::domain::transaction::TransactionManager;
use shared_kernel::errors::Result;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Une unité de travail par requête d'écriture
pub struct UnitOfWorkFactory {
    tx_manager: Arc<dyn TransactionManager>,
    repositories: ProfileRepositories,
}

impl UnitOfWorkFactory {
    pub fn new(tx_manager: Arc<dyn TransactionManager>, repositories: ProfileRepositories) -> Self {
        Self { tx_manager, repositories }
    }

    pub async fn create_unit(&self) -> Result<UnitOfWork> {
        let tx = self.tx_manager.begin().await?;
        Ok(UnitOfWork::new(tx, self.repositories.clone()))
    }

    /// Ouvre une unité, exécute `work`, puis commit sur `Ok` ou rollback sur `Err`.
    /// La closure doit posséder ses données (clones), comme pour `execute_on`.
    pub async fn run_in_unit<T, F>(&self, work: F) -> Result<T>
    where
        T: Send,
        F: for<'u> FnOnce(&'u mut UnitOfWork) -> Pin<Box<dyn Future<Output = Result<T>> + Send + 'u>>
            + Send,
    {
        let mut uow = self.create_unit().await?;

        match work(&mut uow).await {
            Ok(value) => {
                uow.commit().await?;
                Ok(value)
            }
            Err(error) => {
                if let Err(rollback_error) = uow.rollback().await {
                    tracing::error!(%rollback_error, "Rollback failed");
                }
                Err(error)
            }
        }
    }

    /// Accès en lecture, hors transaction
    pub fn repositories(&self) -> &ProfileRepositories {
        &self.repositories
    }
}
