// crates/profile/src/application/delete_image/delete_image_use_case.rs

use crate::application::delete_image::DeleteImageCommand;
use crate::application::workers::ImagePurgeProcessor;
use crate::domain::entities::{Image, PurgeJob};
use crate::domain::unit_of_work::UnitOfWorkFactory;
use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::Result;
use std::sync::Arc;

pub struct DeleteImageUseCase {
    uow_factory: Arc<UnitOfWorkFactory>,
    purger: Arc<ImagePurgeProcessor>,
    clock: Arc<dyn Clock>,
}

impl DeleteImageUseCase {
    pub fn new(uow_factory: Arc<UnitOfWorkFactory>, purger: Arc<ImagePurgeProcessor>, clock: Arc<dyn Clock>) -> Self {
        Self { uow_factory, purger, clock }
    }

    /// Suppression logique de la ligne, purge du blob via l'outbox
    pub async fn execute(&self, command: DeleteImageCommand) -> Result<Image> {
        let DeleteImageCommand { profile_id, image_id } = command;
        let now = self.clock.now();

        let (image, job) = self
            .uow_factory
            .run_in_unit(move |uow| {
                Box::pin(async move {
                    // Une image d'un autre profil est introuvable pour l'appelant
                    let image = uow
                        .images()
                        .find_by_id(image_id, Some(uow.tx()?))
                        .await?
                        .filter(|i| i.profile_id == profile_id && !i.is_deleted())
                        .ok_or_else(|| Image::not_found(image_id))?;

                    let job = PurgeJob::new(image.name.clone(), now);
                    let image = uow.images().mark_deleted(image_id, now, Some(uow.tx()?)).await?;
                    uow.purge_outbox().enqueue(std::slice::from_ref(&job), Some(uow.tx()?)).await?;

                    Ok((image, job))
                })
            })
            .await?;

        self.purger.purge(std::slice::from_ref(&job)).await;

        tracing::info!(%profile_id, %image_id, "🗑️ Image deleted");
        Ok(image)
    }
}
