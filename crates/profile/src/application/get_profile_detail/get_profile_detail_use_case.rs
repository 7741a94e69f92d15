// crates/profile/src/application/get_profile_detail/get_profile_detail_use_case.rs

use crate::application::common::{ActivityTracker, ProfileGuard};
use crate::application::get_profile_detail::{GetProfileDetailCommand, ProfileDetailDto};
use crate::domain::unit_of_work::ProfileRepositories;
use shared_kernel::clock::Clock;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;
use std::sync::Arc;

pub struct GetProfileDetailUseCase {
    repositories: ProfileRepositories,
    guard: ProfileGuard,
    tracker: ActivityTracker,
    clock: Arc<dyn Clock>,
    online_window: chrono::Duration,
}

impl GetProfileDetailUseCase {
    pub fn new(
        repositories: ProfileRepositories,
        guard: ProfileGuard,
        tracker: ActivityTracker,
        clock: Arc<dyn Clock>,
        online_window: chrono::Duration,
    ) -> Self {
        Self { repositories, guard, tracker, clock, online_window }
    }

    pub async fn execute(&self, command: GetProfileDetailCommand) -> Result<ProfileDetailDto> {
        let viewer_id = command.viewer_id;
        let profile_id = command.profile_id;

        self.guard.ensure_active(viewer_id).await?;
        self.tracker.refresh(viewer_id, command.position).await?;

        let status = self.guard.ensure_active(profile_id).await?;

        let repos = &self.repositories;
        let (profile, distance, images, is_blocked, like) = tokio::try_join!(
            repos.profiles.find_by_id(profile_id, None),
            repos.navigators.distance_between(viewer_id, profile_id),
            repos.images.list_public(profile_id),
            repos.blocks.exists(viewer_id, profile_id),
            repos.likes.find_by_pair(viewer_id, profile_id),
        )?;
        let profile = profile.ok_or_not_found(profile_id)?;

        let now = self.clock.now();

        Ok(ProfileDetailDto {
            id: profile.id,
            age: profile.age_on(now.date_naive()),
            is_online: profile.is_online(now, self.online_window),
            display_name: profile.display_name,
            gender: profile.gender,
            location: profile.location,
            description: profile.description,
            height: profile.height,
            weight: profile.weight,
            distance: distance.filter(|_| status.is_show_distance),
            last_online: profile.last_online,
            images: images.into_iter().map(Into::into).collect(),
            is_blocked,
            like: like.map(Into::into),
        })
    }
}
