// crates/profile/src/application/restore_profile/restore_profile_use_case.rs

use crate::application::common::ProfileGuard;
use crate::application::restore_profile::RestoreProfileCommand;
use crate::domain::entities::Status;
use crate::domain::params::StatusPatch;
use crate::domain::unit_of_work::UnitOfWorkFactory;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::retry::{with_retry, RetryConfig};
use std::sync::Arc;

pub struct RestoreProfileUseCase {
    uow_factory: Arc<UnitOfWorkFactory>,
    guard: ProfileGuard,
    clock: Arc<dyn Clock>,
}

impl RestoreProfileUseCase {
    pub fn new(uow_factory: Arc<UnitOfWorkFactory>, guard: ProfileGuard, clock: Arc<dyn Clock>) -> Self {
        Self { uow_factory, guard, clock }
    }

    /// Idempotent : restaurer un profil actif réussit
    pub async fn execute(&self, command: RestoreProfileCommand) -> Result<Status> {
        let profile_id = command.profile_id;
        self.guard.ensure_exists(profile_id).await?;

        let status = with_retry(RetryConfig::default(), || {
            let now = self.clock.now();
            self.uow_factory.run_in_unit(move |uow| {
                Box::pin(async move {
                    uow.profiles().touch_last_online(profile_id, now, Some(uow.tx()?)).await?;
                    uow.statuses()
                        .update(profile_id, &StatusPatch::frozen(false), Some(uow.tx()?))
                        .await
                })
            })
        })
        .await?;

        tracing::info!(%profile_id, "🔥 Profile restored");
        Ok(status)
    }
}
