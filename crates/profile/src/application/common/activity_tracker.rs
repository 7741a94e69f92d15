// crates/profile/src/application/common/activity_tracker.rs

use crate::application::common::upsert_navigator;
use crate::domain::entities::{Navigator, Position};
use crate::domain::unit_of_work::UnitOfWorkFactory;
use crate::domain::value_objects::ProfileId;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::retry::{with_retry, RetryConfig};
use std::sync::Arc;

/// Rafraîchit la dernière activité et, si fournie, la position, dans sa propre petite transaction
#[derive(Clone)]
pub struct ActivityTracker {
    uow_factory: Arc<UnitOfWorkFactory>,
    clock: Arc<dyn Clock>,
}

impl ActivityTracker {
    pub fn new(uow_factory: Arc<UnitOfWorkFactory>, clock: Arc<dyn Clock>) -> Self {
        Self { uow_factory, clock }
    }

    pub async fn refresh(&self, profile_id: ProfileId, position: Option<Position>) -> Result<Option<Navigator>> {
        with_retry(RetryConfig::default(), || {
            let position = position.clone();
            let now = self.clock.now();

            self.uow_factory.run_in_unit(move |uow| {
                Box::pin(async move {
                    uow.profiles().touch_last_online(profile_id, now, Some(uow.tx()?)).await?;

                    match position {
                        Some(position) => Ok(Some(upsert_navigator(uow, profile_id, &position, now).await?)),
                        None => Ok(None),
                    }
                })
            })
        })
        .await
    }
}
