// crates/profile/src/application/update_like/update_like_use_case.rs

use crate::application::update_like::UpdateLikeCommand;
use crate::domain::entities::Like;
use crate::domain::unit_of_work::UnitOfWorkFactory;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::Result;
use std::sync::Arc;

pub struct UpdateLikeUseCase {
    uow_factory: Arc<UnitOfWorkFactory>,
}

impl UpdateLikeUseCase {
    pub fn new(uow_factory: Arc<UnitOfWorkFactory>) -> Self {
        Self { uow_factory }
    }

    pub async fn execute(&self, command: UpdateLikeCommand) -> Result<Like> {
        let UpdateLikeCommand { like_id, profile_id, is_liked } = command;

        self.uow_factory
            .run_in_unit(move |uow| {
                Box::pin(async move {
                    // Seul l'auteur voit son like
                    uow.likes()
                        .find_by_id(like_id, Some(uow.tx()?))
                        .await?
                        .filter(|l| l.profile_id == profile_id)
                        .ok_or_else(|| Like::not_found(like_id))?;

                    uow.likes().update(like_id, is_liked, Some(uow.tx()?)).await
                })
            })
            .await
    }
}
