// crates/profile/src/application/update_coordinates/update_coordinates_use_case.rs

use crate::application::common::{upsert_navigator, ProfileGuard};
use crate::application::update_coordinates::UpdateCoordinatesCommand;
use crate::domain::entities::Navigator;
use crate::domain::unit_of_work::UnitOfWorkFactory;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::retry::{with_retry, RetryConfig};
use std::sync::Arc;

/// Rafraîchissement de position seul (pings de l'application au premier plan)
pub struct UpdateCoordinatesUseCase {
    uow_factory: Arc<UnitOfWorkFactory>,
    guard: ProfileGuard,
    clock: Arc<dyn Clock>,
}

impl UpdateCoordinatesUseCase {
    pub fn new(uow_factory: Arc<UnitOfWorkFactory>, guard: ProfileGuard, clock: Arc<dyn Clock>) -> Self {
        Self { uow_factory, guard, clock }
    }

    pub async fn execute(&self, command: UpdateCoordinatesCommand) -> Result<Navigator> {
        let profile_id = command.profile_id;
        self.guard.ensure_exists(profile_id).await?;

        with_retry(RetryConfig::default(), || {
            let position = command.position.clone();
            let now = self.clock.now();

            self.uow_factory.run_in_unit(move |uow| {
                Box::pin(async move { upsert_navigator(uow, profile_id, &position, now).await })
            })
        })
        .await
    }
}
