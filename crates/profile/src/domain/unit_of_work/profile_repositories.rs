// crates/profile/src/domain/unit_of_work/profile_repositories.rs

use crate::domain::repositories::{
    BlockRepository, ComplaintRepository, FilterRepository, IdentityRepository, ImagePurgeOutbox,
    ImageRepository, LikeRepository, NavigatorRepository, ProfileRepository, StatusRepository,
};
use std::sync::Arc;

/// Jeu complet de repositories du contexte profil.
/// Les lectures hors transaction passent directement par ces handles.
#[derive(Clone)]
pub struct ProfileRepositories {
    pub profiles: Arc<dyn ProfileRepository>,
    pub navigators: Arc<dyn NavigatorRepository>,
    pub filters: Arc<dyn FilterRepository>,
    pub identities: Arc<dyn IdentityRepository>,
    pub statuses: Arc<dyn StatusRepository>,
    pub images: Arc<dyn ImageRepository>,
    pub blocks: Arc<dyn BlockRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub complaints: Arc<dyn ComplaintRepository>,
    pub purge_outbox: Arc<dyn ImagePurgeOutbox>,
}
