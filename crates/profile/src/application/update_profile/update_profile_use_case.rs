// crates/profile/src/application/update_profile/update_profile_use_case.rs

use crate::application::common::ProfileGuard;
use crate::application::saga::{ProfileSaga, ProfileSagaRunner, ProfileSagaStep};
use crate::application::update_profile::UpdateProfileCommand;
use crate::domain::models::ProfileAggregate;
use shared_kernel::errors::Result;
use std::sync::Arc;

pub struct UpdateProfileUseCase {
    runner: Arc<ProfileSagaRunner>,
    guard: ProfileGuard,
}

impl UpdateProfileUseCase {
    pub fn new(runner: Arc<ProfileSagaRunner>, guard: ProfileGuard) -> Self {
        Self { runner, guard }
    }

    /// Applique les patches puis renvoie l'agrégat relu dans la même transaction
    pub async fn execute(&self, cmd: UpdateProfileCommand) -> Result<ProfileAggregate> {
        let profile_id = cmd.profile_id;

        // 1. Un profil gelé ou bloqué ne se modifie pas
        self.guard.ensure_active(profile_id).await?;

        // 2. Les étapes touchent des lignes disjointes, l'ordre suit celui de la création
        let navigator_step = match cmd.position {
            Some(position) => ProfileSagaStep::UpsertNavigator(position),
            None => ProfileSagaStep::LoadNavigator,
        };

        let saga = ProfileSaga::new(profile_id)
            .then_each(cmd.images, ProfileSagaStep::StoreImage)
            .then(navigator_step)
            .then(ProfileSagaStep::UpdateFilter(cmd.filter))
            .then(ProfileSagaStep::UpdateIdentity(cmd.identity))
            .then(ProfileSagaStep::TouchLastOnline)
            .then(ProfileSagaStep::UpdateProfile(cmd.profile))
            .then(ProfileSagaStep::LoadStatus)
            .then(ProfileSagaStep::LoadImages);

        let aggregate = self.runner.run(saga).await?.into_aggregate()?;

        tracing::info!(%profile_id, images = aggregate.images.len(), "✏️ Profile updated");
        Ok(aggregate)
    }
}
