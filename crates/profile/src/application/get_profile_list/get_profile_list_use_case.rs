// crates/profile/src/application/get_profile_list/get_profile_list_use_case.rs

use crate::application::common::{ActivityTracker, ProfileGuard};
use crate::application::get_profile_list::GetProfileListCommand;
use crate::domain::models::{ProfileListItem, ProfileListQuery};
use crate::domain::repositories::ProfileRepository;
use shared_kernel::application::{PageRequest, PageResponse};
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;
use std::sync::Arc;

pub struct GetProfileListUseCase {
    profiles: Arc<dyn ProfileRepository>,
    guard: ProfileGuard,
    tracker: ActivityTracker,
    clock: Arc<dyn Clock>,
    online_window: chrono::Duration,
}

impl GetProfileListUseCase {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        guard: ProfileGuard,
        tracker: ActivityTracker,
        clock: Arc<dyn Clock>,
        online_window: chrono::Duration,
    ) -> Self {
        Self { profiles, guard, tracker, clock, online_window }
    }

    pub async fn execute(&self, command: GetProfileListCommand) -> Result<PageResponse<ProfileListItem>> {
        let requester_id = command.requester_id;
        let page = PageRequest::try_new(command.page, command.size)?;

        self.guard.ensure_active(requester_id).await?;
        // La position fraîche doit servir d'origine au calcul des distances
        self.tracker.refresh(requester_id, command.position).await?;

        let query = ProfileListQuery {
            requester_id,
            search_gender: command.search_gender,
            age_range: command.age_range,
            distance: command.distance,
            page,
            online_since: self.clock.now() - self.online_window,
        };

        let response = self.profiles.find_nearby(&query).await?;

        tracing::debug!(
            %requester_id,
            page = page.page(),
            returned = response.content.len(),
            total = response.pagination.total_entities,
            "🔎 Discovery query"
        );
        Ok(response)
    }
}
