// crates/profile/src/application/get_profile_short_info/get_profile_short_info_use_case.rs

use crate::application::common::ProfileGuard;
use crate::application::get_profile_short_info::{GetProfileShortInfoCommand, ProfileShortInfoDto};
use crate::domain::unit_of_work::ProfileRepositories;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

pub struct GetProfileShortInfoUseCase {
    repositories: ProfileRepositories,
    guard: ProfileGuard,
}

impl GetProfileShortInfoUseCase {
    pub fn new(repositories: ProfileRepositories, guard: ProfileGuard) -> Self {
        Self { repositories, guard }
    }

    pub async fn execute(&self, command: GetProfileShortInfoCommand) -> Result<ProfileShortInfoDto> {
        let profile_id = command.profile_id;
        let status = self.guard.ensure_exists(profile_id).await?;

        let (profile, image) = tokio::try_join!(
            self.repositories.profiles.find_by_id(profile_id, None),
            self.repositories.images.last_public(profile_id),
        )?;
        let profile = profile.ok_or_not_found(profile_id)?;

        Ok(ProfileShortInfoDto {
            id: profile.id,
            display_name: profile.display_name,
            image_url: image.map(|i| i.url.as_str().to_string()),
            is_frozen: status.is_frozen,
            is_blocked: status.is_blocked,
            is_premium: status.is_premium,
        })
    }
}
