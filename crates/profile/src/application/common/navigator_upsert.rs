// crates/profile/src/application/common/navigator_upsert.rs

use crate::domain::entities::{Navigator, Position};
use crate::domain::unit_of_work::UnitOfWork;
use crate::domain::value_objects::ProfileId;
use chrono::{DateTime, Utc};
use shared_kernel::errors::Result;

/// Insère la position si le profil n'en a pas encore, la met à jour sinon.
/// Garantit une seule ligne Navigator par profil.
pub async fn upsert_navigator(
    uow: &mut UnitOfWork,
    profile_id: ProfileId,
    position: &Position,
    now: DateTime<Utc>,
) -> Result<Navigator> {
    let navigators = uow.navigators();
    let navigator = Navigator {
        profile_id,
        point: position.point,
        country_code: position.country_code.clone(),
        created_at: now,
        updated_at: now,
    };

    if navigators.exists(profile_id, Some(uow.tx()?)).await? {
        navigators.update(&navigator, Some(uow.tx()?)).await
    } else {
        navigators.add(&navigator, Some(uow.tx()?)).await
    }
}
