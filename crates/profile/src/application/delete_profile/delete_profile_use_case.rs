// crates/profile/src/application/delete_profile/delete_profile_use_case.rs

use crate::application::common::ProfileGuard;
use crate::application::delete_profile::DeleteProfileCommand;
use crate::application::workers::ImagePurgeProcessor;
use crate::domain::entities::PurgeJob;
use crate::domain::unit_of_work::UnitOfWorkFactory;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;
use std::sync::Arc;

pub struct DeleteProfileUseCase {
    uow_factory: Arc<UnitOfWorkFactory>,
    guard: ProfileGuard,
    purger: Arc<ImagePurgeProcessor>,
    clock: Arc<dyn Clock>,
}

impl DeleteProfileUseCase {
    pub fn new(
        uow_factory: Arc<UnitOfWorkFactory>,
        guard: ProfileGuard,
        purger: Arc<ImagePurgeProcessor>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { uow_factory, guard, purger, clock }
    }

    pub async fn execute(&self, command: DeleteProfileCommand) -> Result<()> {
        let profile_id = command.profile_id;
        self.guard.ensure_exists(profile_id).await?;

        let now = self.clock.now();

        // 1. Purges planifiées et suppression en cascade dans la même transaction
        let jobs = self
            .uow_factory
            .run_in_unit(move |uow| {
                Box::pin(async move {
                    let images = uow.images().list_all(profile_id, Some(uow.tx()?)).await?;
                    let jobs: Vec<PurgeJob> = images.into_iter().map(|i| PurgeJob::new(i.name, now)).collect();

                    uow.purge_outbox().enqueue(&jobs, Some(uow.tx()?)).await?;
                    uow.profiles().delete(profile_id, Some(uow.tx()?)).await?;

                    Ok(jobs)
                })
            })
            .await?;

        // 2. Best effort après commit, le worker reprend ce qui reste
        let purged = self.purger.purge(&jobs).await;

        tracing::info!(%profile_id, images = jobs.len(), purged, "🗑️ Profile deleted");
        Ok(())
    }
}
