// crates/profile/src/application/delete_image/delete_image_command.rs

use crate::domain::value_objects::{ImageId, ProfileId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteImageCommand {
    pub profile_id: ProfileId,
    pub image_id: ImageId,
}
