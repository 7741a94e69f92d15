// crates/profile/src/domain/params/status_patch.rs

/// Chaque drapeau est écrit seul : geler ne touche pas `is_blocked` ni `is_premium`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusPatch {
    pub is_frozen: Option<bool>,
    pub is_blocked: Option<bool>,
    pub is_premium: Option<bool>,
    pub is_show_distance: Option<bool>,
    pub is_invisible: Option<bool>,
    pub is_left_hand: Option<bool>,
}

impl StatusPatch {
    pub fn frozen(value: bool) -> Self {
        Self { is_frozen: Some(value), ..Default::default() }
    }

    pub fn blocked(value: bool) -> Self {
        Self { is_blocked: Some(value), ..Default::default() }
    }
}
