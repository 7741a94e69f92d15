// crates/profile/src/application/update_filter/update_filter_use_case.rs

use crate::application::common::ProfileGuard;
use crate::application::update_filter::UpdateFilterCommand;
use crate::domain::entities::Filter;
use crate::domain::unit_of_work::UnitOfWorkFactory;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::retry::{with_retry, RetryConfig};
use std::sync::Arc;

pub struct UpdateFilterUseCase {
    uow_factory: Arc<UnitOfWorkFactory>,
    guard: ProfileGuard,
}

impl UpdateFilterUseCase {
    pub fn new(uow_factory: Arc<UnitOfWorkFactory>, guard: ProfileGuard) -> Self {
        Self { uow_factory, guard }
    }

    pub async fn execute(&self, command: UpdateFilterCommand) -> Result<Filter> {
        let profile_id = command.profile_id;
        self.guard.ensure_exists(profile_id).await?;

        with_retry(RetryConfig::default(), || {
            let patch = command.patch.clone();
            self.uow_factory.run_in_unit(move |uow| {
                Box::pin(async move { uow.filters().update(profile_id, &patch, Some(uow.tx()?)).await })
            })
        })
        .await
    }
}
