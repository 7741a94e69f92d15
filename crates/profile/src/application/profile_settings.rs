// crates/profile/src/application/profile_settings.rs

use std::str::FromStr;
use std::time::Duration;

/// Réglages métier du contexte profil (`PROFILE_*`)
#[derive(Debug, Clone)]
pub struct ProfileSettings {
    /// Fenêtre de l'heuristique "en ligne"
    pub online_window: Duration,
    /// Nombre de plaintes déclenchant le blocage automatique
    pub complaint_block_threshold: u64,
    /// Délai maximal d'une saga avant annulation
    pub saga_deadline: Duration,
    pub like_notification_text: String,
    pub purge_batch_size: u32,
    pub purge_polling_interval: Duration,
    pub purge_max_attempts: i32,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            online_window: Duration::from_secs(5 * 60),
            complaint_block_threshold: 5,
            saga_deadline: Duration::from_secs(10),
            like_notification_text: "Someone liked your profile!".to_string(),
            purge_batch_size: 50,
            purge_polling_interval: Duration::from_secs(5),
            purge_max_attempts: 10,
        }
    }
}

impl ProfileSettings {
    /// Valeurs par défaut surchargées par l'environnement
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            online_window: Duration::from_secs(env_or(
                "PROFILE_ONLINE_WINDOW_SECS",
                defaults.online_window.as_secs(),
            )),
            complaint_block_threshold: env_or(
                "PROFILE_COMPLAINT_BLOCK_THRESHOLD",
                defaults.complaint_block_threshold,
            ),
            saga_deadline: Duration::from_millis(env_or(
                "PROFILE_SAGA_DEADLINE_MS",
                defaults.saga_deadline.as_millis() as u64,
            )),
            like_notification_text: std::env::var("PROFILE_LIKE_NOTIFICATION_TEXT")
                .unwrap_or(defaults.like_notification_text),
            purge_batch_size: env_or("PROFILE_PURGE_BATCH_SIZE", defaults.purge_batch_size),
            purge_polling_interval: Duration::from_secs(env_or(
                "PROFILE_PURGE_INTERVAL_SECS",
                defaults.purge_polling_interval.as_secs(),
            )),
            purge_max_attempts: env_or("PROFILE_PURGE_MAX_ATTEMPTS", defaults.purge_max_attempts),
        }
    }

    pub fn with_online_window(mut self, window: Duration) -> Self {
        self.online_window = window;
        self
    }

    pub fn with_complaint_block_threshold(mut self, threshold: u64) -> Self {
        self.complaint_block_threshold = threshold;
        self
    }

    pub fn with_saga_deadline(mut self, deadline: Duration) -> Self {
        self.saga_deadline = deadline;
        self
    }

    pub fn online_window_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.online_window).unwrap_or(chrono::Duration::minutes(5))
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
