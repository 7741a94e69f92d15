// crates/profile/src/application/freeze_profile/freeze_profile_command.rs

use crate::domain::value_objects::ProfileId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreezeProfileCommand {
    pub profile_id: ProfileId,
}
