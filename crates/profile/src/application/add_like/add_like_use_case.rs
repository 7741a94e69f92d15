// crates/profile/src/application/add_like/add_like_use_case.rs

use crate::application::add_like::AddLikeCommand;
use crate::application::common::ProfileGuard;
use crate::application::ports::{LikeNotifier, NewLikeNotification};
use crate::domain::entities::Like;
use crate::domain::unit_of_work::UnitOfWorkFactory;
use crate::domain::value_objects::ProfileId;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;
use std::sync::Arc;

pub struct AddLikeUseCase {
    uow_factory: Arc<UnitOfWorkFactory>,
    guard: ProfileGuard,
    notifier: Arc<dyn LikeNotifier>,
    message: String,
}

impl AddLikeUseCase {
    pub fn new(
        uow_factory: Arc<UnitOfWorkFactory>,
        guard: ProfileGuard,
        notifier: Arc<dyn LikeNotifier>,
        message: impl Into<String>,
    ) -> Self {
        Self { uow_factory, guard, notifier, message: message.into() }
    }

    pub async fn execute(&self, command: AddLikeCommand) -> Result<Like> {
        let AddLikeCommand { profile_id, liked_profile_id } = command;

        ProfileGuard::ensure_distinct(profile_id, liked_profile_id, "liked_profile_id")?;
        self.guard.ensure_exists(profile_id).await?;
        self.guard.ensure_exists(liked_profile_id).await?;

        let like = self
            .uow_factory
            .run_in_unit(move |uow| {
                Box::pin(async move { uow.likes().add(profile_id, liked_profile_id, Some(uow.tx()?)).await })
            })
            .await?;

        tracing::info!(%profile_id, %liked_profile_id, like_id = %like.id, "❤️ Like added");

        // Le like est validé, la notification ne doit jamais le faire échouer
        if let Err(error) = self.notify(profile_id, liked_profile_id).await {
            tracing::warn!(%profile_id, %liked_profile_id, %error, "Like notification failed");
        }

        Ok(like)
    }

    async fn notify(&self, sender_id: ProfileId, recipient_id: ProfileId) -> Result<()> {
        let repos = self.uow_factory.repositories();
        let (sender, image) = tokio::try_join!(
            repos.profiles.find_by_id(sender_id, None),
            repos.images.last_public(sender_id),
        )?;
        let sender = sender.ok_or_not_found(sender_id)?;

        let notification = NewLikeNotification {
            recipient_id,
            message: self.message.clone(),
            sender_display_name: sender.display_name.as_str().to_string(),
            sender_image_url: image.map(|i| i.url.as_str().to_string()),
        };

        self.notifier.notify_new_like(&notification).await
    }
}
