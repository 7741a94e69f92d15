// crates/profile/src/application/update_coordinates/update_coordinates_command.rs

use crate::domain::entities::Position;
use crate::domain::value_objects::ProfileId;

#[derive(Debug, Clone)]
pub struct UpdateCoordinatesCommand {
    pub profile_id: ProfileId,
    pub position: Position,
}
