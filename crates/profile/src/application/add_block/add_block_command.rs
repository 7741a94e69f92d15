// crates/profile/src/application/add_block/add_block_command.rs

use crate::domain::value_objects::ProfileId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBlockCommand {
    pub profile_id: ProfileId,
    pub blocked_profile_id: ProfileId,
}
