// crates/profile/src/application/saga/saga_step.rs

use crate::application::common::ImageUpload;
use crate::domain::entities::{Filter, Identity, Position, Profile, Status};
use crate::domain::params::{FilterPatch, IdentityPatch, ProfilePatch, StatusPatch};

/// Nature d'une étape : seules les étapes `ObjectStore` ont un effet hors transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Storage,
    ObjectStore,
    Read,
}

/// Étape d'une saga d'écriture de profil, exécutée dans l'unité de travail de la saga
#[derive(Debug, Clone)]
pub enum ProfileSagaStep {
    InsertProfile(Profile),
    UpdateProfile(ProfilePatch),
    TouchLastOnline,
    InsertStatus(Status),
    UpdateStatus(StatusPatch),
    UpsertNavigator(Position),
    /// Upload puis ligne Image ; compensé par une suppression du blob si la saga échoue
    StoreImage(ImageUpload),
    InsertFilter(Filter),
    UpdateFilter(FilterPatch),
    InsertIdentity(Identity),
    UpdateIdentity(IdentityPatch),
    LoadNavigator,
    LoadStatus,
    LoadImages,
}

impl ProfileSagaStep {
    pub fn kind(&self) -> StepKind {
        match self {
            Self::StoreImage(_) => StepKind::ObjectStore,
            Self::LoadNavigator | Self::LoadStatus | Self::LoadImages => StepKind::Read,
            _ => StepKind::Storage,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertProfile(_) => "insert_profile",
            Self::UpdateProfile(_) => "update_profile",
            Self::TouchLastOnline => "touch_last_online",
            Self::InsertStatus(_) => "insert_status",
            Self::UpdateStatus(_) => "update_status",
            Self::UpsertNavigator(_) => "upsert_navigator",
            Self::StoreImage(_) => "store_image",
            Self::InsertFilter(_) => "insert_filter",
            Self::UpdateFilter(_) => "update_filter",
            Self::InsertIdentity(_) => "insert_identity",
            Self::UpdateIdentity(_) => "update_identity",
            Self::LoadNavigator => "load_navigator",
            Self::LoadStatus => "load_status",
            Self::LoadImages => "load_images",
        }
    }
}
