// crates/profile/src/application/common/image_upload.rs

use crate::domain::value_objects::ProfileId;
use std::path::Path;
use uuid::Uuid;

/// Fichier image déjà décodé par la couche transport
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub is_primary: bool,
    pub is_private: bool,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
            is_primary: false,
            is_private: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    /// Clé unique dans l'object store : `profiles/<id>/<uuid v7>.<ext>`
    pub fn object_key(&self, profile_id: ProfileId) -> String {
        let extension = Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or_else(|| "bin".to_string());

        format!("profiles/{}/{}.{}", profile_id, Uuid::now_v7(), extension)
    }
}
