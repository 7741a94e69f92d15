// crates/profile/src/application/ports/object_store.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::Url;
use shared_kernel::errors::Result;

/// Stockage des fichiers image.
/// Les échecs remontent en `DomainError::Collaborator`.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Écrit `bytes` sous `path` et renvoie l'URL publique
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<Url>;

    /// Idempotent : un blob absent n'est pas une erreur
    async fn delete(&self, path: &str) -> Result<()>;
}
