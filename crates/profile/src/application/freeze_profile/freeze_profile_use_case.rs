// crates/profile/src/application/freeze_profile/freeze_profile_use_case.rs

use crate::application::common::ProfileGuard;
use crate::application::freeze_profile::FreezeProfileCommand;
use crate::domain::entities::Status;
use crate::domain::params::StatusPatch;
use crate::domain::unit_of_work::UnitOfWorkFactory;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::retry::{with_retry, RetryConfig};
use std::sync::Arc;

pub struct FreezeProfileUseCase {
    uow_factory: Arc<UnitOfWorkFactory>,
    guard: ProfileGuard,
    clock: Arc<dyn Clock>,
}

impl FreezeProfileUseCase {
    pub fn new(uow_factory: Arc<UnitOfWorkFactory>, guard: ProfileGuard, clock: Arc<dyn Clock>) -> Self {
        Self { uow_factory, guard, clock }
    }

    /// Idempotent : geler un profil déjà gelé réussit
    pub async fn execute(&self, command: FreezeProfileCommand) -> Result<Status> {
        let profile_id = command.profile_id;
        self.guard.ensure_exists(profile_id).await?;

        let status = with_retry(RetryConfig::default(), || {
            let now = self.clock.now();
            self.uow_factory.run_in_unit(move |uow| {
                Box::pin(async move {
                    uow.profiles().touch_last_online(profile_id, now, Some(uow.tx()?)).await?;
                    uow.statuses()
                        .update(profile_id, &StatusPatch::frozen(true), Some(uow.tx()?))
                        .await
                })
            })
        })
        .await?;

        tracing::info!(%profile_id, "🧊 Profile frozen");
        Ok(status)
    }
}
