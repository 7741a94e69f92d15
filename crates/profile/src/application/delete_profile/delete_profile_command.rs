// crates/profile/src/application/delete_profile/delete_profile_command.rs

use crate::domain::value_objects::ProfileId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProfileCommand {
    pub profile_id: ProfileId,
}
