// crates/profile/src/application/ports/like_notifier.rs

use crate::domain::value_objects::ProfileId;
use async_trait::async_trait;
use serde::Serialize;
use shared_kernel::errors::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLikeNotification {
    pub recipient_id: ProfileId,
    pub message: String,
    pub sender_display_name: String,
    pub sender_image_url: Option<String>,
}

/// Canal de notification "nouveau like", injecté à la construction
#[async_trait]
pub trait LikeNotifier: Send + Sync {
    async fn notify_new_like(&self, notification: &NewLikeNotification) -> Result<()>;
}
