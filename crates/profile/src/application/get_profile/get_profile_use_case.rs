// crates/profile/src/application/get_profile/get_profile_use_case.rs

use crate::application::common::{ActivityTracker, ProfileGuard};
use crate::application::get_profile::GetProfileCommand;
use crate::domain::models::ProfileAggregate;
use crate::domain::unit_of_work::ProfileRepositories;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

pub struct GetProfileUseCase {
    repositories: ProfileRepositories,
    guard: ProfileGuard,
    tracker: ActivityTracker,
}

impl GetProfileUseCase {
    pub fn new(repositories: ProfileRepositories, guard: ProfileGuard, tracker: ActivityTracker) -> Self {
        Self { repositories, guard, tracker }
    }

    /// Vue propriétaire : l'agrégat complet avec les images non supprimées
    pub async fn execute(&self, command: GetProfileCommand) -> Result<ProfileAggregate> {
        let profile_id = command.profile_id;
        let status = self.guard.ensure_exists(profile_id).await?;

        self.tracker.refresh(profile_id, command.position).await?;

        let repos = &self.repositories;
        let (profile, navigator, filter, identity, images) = tokio::try_join!(
            repos.profiles.find_by_id(profile_id, None),
            repos.navigators.find_by_profile_id(profile_id, None),
            repos.filters.find_by_profile_id(profile_id, None),
            repos.identities.find_by_profile_id(profile_id, None),
            repos.images.list_active(profile_id, None),
        )?;

        Ok(ProfileAggregate {
            profile: profile.ok_or_not_found(profile_id)?,
            navigator,
            filter: filter.ok_or_not_found(profile_id)?,
            identity: identity.ok_or_not_found(profile_id)?,
            status,
            images,
        })
    }
}
