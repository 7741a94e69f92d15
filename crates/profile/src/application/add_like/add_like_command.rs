// crates/profile/src/application/add_like/add_like_command.rs

use crate::domain::value_objects::ProfileId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddLikeCommand {
    pub profile_id: ProfileId,
    pub liked_profile_id: ProfileId,
}
