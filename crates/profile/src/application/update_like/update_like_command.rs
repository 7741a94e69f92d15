// crates/profile/src/application/update_like/update_like_command.rs

use crate::domain::value_objects::{LikeId, ProfileId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLikeCommand {
    pub like_id: LikeId,
    /// Auteur du like
    pub profile_id: ProfileId,
    pub is_liked: bool,
}
