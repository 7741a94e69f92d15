// crates/profile/src/application/get_profile/get_profile_command.rs

use crate::domain::entities::Position;
use crate::domain::value_objects::ProfileId;

#[derive(Debug, Clone)]
pub struct GetProfileCommand {
    pub profile_id: ProfileId,
    /// Position courante de l'appareil, enregistrée au passage
    pub position: Option<Position>,
}
