// crates/profile/src/application/get_profile_short_info/get_profile_short_info_command.rs

use crate::domain::value_objects::ProfileId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProfileShortInfoCommand {
    pub profile_id: ProfileId,
}
