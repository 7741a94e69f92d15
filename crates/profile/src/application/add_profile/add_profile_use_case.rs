// crates/profile/src/application/add_profile/add_profile_use_case.rs

use crate::application::add_profile::AddProfileCommand;
use crate::application::saga::{ProfileSaga, ProfileSagaRunner, ProfileSagaStep};
use crate::domain::builders::ProfileBuilder;
use crate::domain::entities::{Filter, Identity, Profile, Status};
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;
use std::sync::Arc;

pub struct AddProfileUseCase {
    runner: Arc<ProfileSagaRunner>,
    clock: Arc<dyn Clock>,
}

impl AddProfileUseCase {
    pub fn new(runner: Arc<ProfileSagaRunner>, clock: Arc<dyn Clock>) -> Self {
        Self { runner, clock }
    }

    /// Crée les six sous-enregistrements en une transaction et renvoie le coeur du profil
    pub async fn execute(&self, cmd: AddProfileCommand) -> Result<Profile> {
        let now = self.clock.now();
        let profile_id = cmd.profile_id;

        let profile = ProfileBuilder::new(profile_id, cmd.display_name, cmd.birthday, cmd.gender)
            .with_location(cmd.location)
            .with_description(cmd.description)
            .with_height(cmd.height)
            .with_weight(cmd.weight)
            .build(now);

        let status = Status {
            is_left_hand: cmd.is_left_hand,
            ..Status::initial(profile_id, now)
        };

        let filter = Filter {
            profile_id,
            search_gender: cmd.search_gender,
            age_range: cmd.age_range,
            distance: cmd.distance,
            page: 1,
            size: cmd.page_size.filter(|s| *s > 0).unwrap_or(Filter::DEFAULT_PAGE_SIZE),
            created_at: now,
            updated_at: now,
        };

        let identity = Identity {
            profile_id,
            external_id: cmd.identity.external_id,
            username: cmd.identity.username,
            first_name: cmd.identity.first_name,
            last_name: cmd.identity.last_name,
            language_code: cmd.identity.language_code,
            allows_write_to_pm: cmd.identity.allows_write_to_pm,
            created_at: now,
            updated_at: now,
        };

        let saga = ProfileSaga::new(profile_id)
            .then(ProfileSagaStep::InsertProfile(profile))
            .then(ProfileSagaStep::InsertStatus(status))
            .then_some(cmd.position, ProfileSagaStep::UpsertNavigator)
            .then_each(cmd.images, ProfileSagaStep::StoreImage)
            .then(ProfileSagaStep::InsertFilter(filter))
            .then(ProfileSagaStep::InsertIdentity(identity));

        let profile = self.runner.run(saga).await?.into_profile()?;

        tracing::info!(%profile_id, "👤 Profile created");
        Ok(profile)
    }
}
