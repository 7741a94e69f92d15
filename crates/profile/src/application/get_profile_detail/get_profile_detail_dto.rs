// crates/profile/src/application/get_profile_detail/get_profile_detail_dto.rs

use crate::domain::entities::{Image, Like};
use crate::domain::value_objects::{DisplayName, Gender, ImageId, LikeId, ProfileId};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImageDto {
    pub id: ImageId,
    pub url: String,
    pub is_primary: bool,
}

impl From<Image> for ProfileImageDto {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            url: image.url.as_str().to_string(),
            is_primary: image.is_primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerLikeDto {
    pub id: LikeId,
    pub is_liked: bool,
}

impl From<Like> for ViewerLikeDto {
    fn from(like: Like) -> Self {
        Self { id: like.id, is_liked: like.is_liked }
    }
}

/// Fiche d'un profil vue par un autre utilisateur
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetailDto {
    pub id: ProfileId,
    pub display_name: DisplayName,
    pub age: u32,
    pub gender: Gender,
    pub location: Option<String>,
    pub description: Option<String>,
    pub height: Option<i16>,
    pub weight: Option<i16>,
    /// Mètres ; masquée si le profil a désactivé l'affichage ou si une position manque
    pub distance: Option<f64>,
    pub last_online: DateTime<Utc>,
    pub is_online: bool,
    pub images: Vec<ProfileImageDto>,
    pub is_blocked: bool,
    pub like: Option<ViewerLikeDto>,
}
