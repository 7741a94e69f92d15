// crates/profile/src/application/add_block/add_block_use_case.rs

use crate::application::add_block::AddBlockCommand;
use crate::application::common::ProfileGuard;
use crate::domain::entities::Block;
use crate::domain::unit_of_work::UnitOfWorkFactory;
use shared_kernel::errors::Result;
use std::sync::Arc;

pub struct AddBlockUseCase {
    uow_factory: Arc<UnitOfWorkFactory>,
    guard: ProfileGuard,
}

impl AddBlockUseCase {
    pub fn new(uow_factory: Arc<UnitOfWorkFactory>, guard: ProfileGuard) -> Self {
        Self { uow_factory, guard }
    }

    /// Idempotent : bloquer deux fois renvoie le même blocage
    pub async fn execute(&self, command: AddBlockCommand) -> Result<Block> {
        let AddBlockCommand { profile_id, blocked_profile_id } = command;

        ProfileGuard::ensure_distinct(profile_id, blocked_profile_id, "blocked_profile_id")?;
        self.guard.ensure_exists(profile_id).await?;
        self.guard.ensure_exists(blocked_profile_id).await?;

        let block = self
            .uow_factory
            .run_in_unit(move |uow| {
                Box::pin(async move { uow.blocks().add(profile_id, blocked_profile_id, Some(uow.tx()?)).await })
            })
            .await?;

        tracing::info!(%profile_id, %blocked_profile_id, "⛔ Profile blocked");
        Ok(block)
    }
}
