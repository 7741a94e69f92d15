// crates/profile/src/application/update_filter/update_filter_command.rs

use crate::domain::params::FilterPatch;
use crate::domain::value_objects::ProfileId;

#[derive(Debug, Clone)]
pub struct UpdateFilterCommand {
    pub profile_id: ProfileId,
    pub patch: FilterPatch,
}
