// crates/profile/src/infrastructure/object_store/disk_object_store.rs

use crate::application::ports::ObjectStore;
use async_trait::async_trait;
use shared_kernel::domain::value_objects::Url;
use shared_kernel::errors::{DomainError, Result};
use std::path::{Component, Path, PathBuf};
use tokio::fs;

const SERVICE: &str = "object_store";

#[derive(Debug, Clone)]
pub struct DiskObjectStoreConfig {
    pub root: PathBuf,
    pub public_url: Url,
}

impl DiskObjectStoreConfig {
    pub fn from_env() -> Result<Self> {
        let root = std::env::var("PROFILE_STORAGE_ROOT").map_err(|_| DomainError::Validation {
            field: "PROFILE_STORAGE_ROOT",
            reason: "must be set".into(),
        })?;
        let public_url = std::env::var("PROFILE_STORAGE_PUBLIC_URL").map_err(|_| DomainError::Validation {
            field: "PROFILE_STORAGE_PUBLIC_URL",
            reason: "must be set".into(),
        })?;

        Ok(Self {
            root: PathBuf::from(root),
            public_url: Url::try_new(public_url)?,
        })
    }
}

/// Blobs stockés sur disque sous `root/<clé>`, servis depuis `public_url/<clé>`
pub struct DiskObjectStore {
    config: DiskObjectStoreConfig,
}

impl DiskObjectStore {
    pub fn new(config: DiskObjectStoreConfig) -> Self {
        Self { config }
    }

    /// Refuse les clés absolues ou remontant hors de la racine
    fn resolve(&self, key: &str) -> Result<PathBuf> {
        let relative = Path::new(key);
        let is_safe = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        if !is_safe {
            return Err(DomainError::collaborator(SERVICE, format!("invalid object key '{key}'")));
        }
        Ok(self.config.root.join(relative))
    }
}

#[async_trait]
impl ObjectStore for DiskObjectStore {
    async fn upload(&self, path: &str, bytes: Vec<u8>, _content_type: &str) -> Result<Url> {
        let target = self.resolve(path)?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::collaborator(SERVICE, format!("create dir for {path}: {e}")))?;
        }

        fs::write(&target, bytes)
            .await
            .map_err(|e| DomainError::collaborator(SERVICE, format!("write {path}: {e}")))?;

        tracing::debug!(path, "📦 Blob stored");
        self.config.public_url.join(path)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let target = self.resolve(path)?;

        match fs::remove_file(&target).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::collaborator(SERVICE, format!("delete {path}: {e}"))),
        }
    }
}
