// crates/profile/src/application/get_profile_detail/get_profile_detail_command.rs

use crate::domain::entities::Position;
use crate::domain::value_objects::ProfileId;

#[derive(Debug, Clone)]
pub struct GetProfileDetailCommand {
    pub viewer_id: ProfileId,
    pub profile_id: ProfileId,
    pub position: Option<Position>,
}
