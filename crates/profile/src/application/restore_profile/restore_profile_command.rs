// crates/profile/src/application/restore_profile/restore_profile_command.rs

use crate::domain::value_objects::ProfileId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreProfileCommand {
    pub profile_id: ProfileId,
}
