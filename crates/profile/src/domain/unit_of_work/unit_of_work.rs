// crates/profile/src/domain/unit_of_work/unit_of_work.rs

use crate::domain::repositories::{
    BlockRepository, ComplaintRepository, FilterRepository, IdentityRepository, ImagePurgeOutbox,
    ImageRepository, LikeRepository, NavigatorRepository, ProfileRepository, StatusRepository,
};
use crate::domain::unit_of_work::ProfileRepositories;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};
use std::sync::Arc;

/// Une transaction de stockage et les repositories qui écrivent dedans.
///
/// Usage : `uow.profiles().add(&profile, Some(uow.tx()?)).await?`, puis `commit()`.
/// Toute sortie sans `commit` (erreur, annulation du future, timeout) annule la transaction
/// lors du `Drop`.
pub struct UnitOfWork {
    tx: Option<Box<dyn Transaction>>,
    repositories: ProfileRepositories,
    committed: bool,
}

impl UnitOfWork {
    pub fn new(tx: Box<dyn Transaction>, repositories: ProfileRepositories) -> Self {
        Self {
            tx: Some(tx),
            repositories,
            committed: false,
        }
    }

    pub fn profiles(&self) -> Arc<dyn ProfileRepository> {
        self.repositories.profiles.clone()
    }

    pub fn navigators(&self) -> Arc<dyn NavigatorRepository> {
        self.repositories.navigators.clone()
    }

    pub fn filters(&self) -> Arc<dyn FilterRepository> {
        self.repositories.filters.clone()
    }

    pub fn identities(&self) -> Arc<dyn IdentityRepository> {
        self.repositories.identities.clone()
    }

    pub fn statuses(&self) -> Arc<dyn StatusRepository> {
        self.repositories.statuses.clone()
    }

    pub fn images(&self) -> Arc<dyn ImageRepository> {
        self.repositories.images.clone()
    }

    pub fn blocks(&self) -> Arc<dyn BlockRepository> {
        self.repositories.blocks.clone()
    }

    pub fn likes(&self) -> Arc<dyn LikeRepository> {
        self.repositories.likes.clone()
    }

    pub fn complaints(&self) -> Arc<dyn ComplaintRepository> {
        self.repositories.complaints.clone()
    }

    pub fn purge_outbox(&self) -> Arc<dyn ImagePurgeOutbox> {
        self.repositories.purge_outbox.clone()
    }

    /// Transaction courante, erreur si l'unité est déjà finalisée
    pub fn tx(&mut self) -> Result<&mut dyn Transaction> {
        match self.tx.as_mut() {
            Some(tx) => {
                let tx: &mut dyn Transaction = &mut **tx;
                Ok(tx)
            }
            None => Err(finalized()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.tx.is_some()
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Échoue si la transaction a déjà été validée ou annulée
    pub async fn commit(&mut self) -> Result<()> {
        let tx = self.tx.take().ok_or_else(finalized)?;
        tx.commit().await?;
        self.committed = true;
        Ok(())
    }

    /// Idempotent, sans effet après un commit réussi
    pub async fn rollback(&mut self) -> Result<()> {
        match self.tx.take() {
            Some(tx) => tx.rollback().await,
            None => Ok(()),
        }
    }
}

impl Drop for UnitOfWork {
    fn drop(&mut self) {
        if self.tx.is_some() {
            tracing::warn!("⚠️ Unit of work dropped before commit, transaction rolled back");
        }
    }
}

fn finalized() -> DomainError {
    DomainError::Internal("unit of work already finalized".into())
}
