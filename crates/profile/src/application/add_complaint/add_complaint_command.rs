// crates/profile/src/application/add_complaint/add_complaint_command.rs

use crate::domain::value_objects::ProfileId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddComplaintCommand {
    pub profile_id: ProfileId,
    pub complained_profile_id: ProfileId,
    pub reason: String,
}
