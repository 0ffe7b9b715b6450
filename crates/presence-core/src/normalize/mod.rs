//! Normalization - reconciles raw input variants into canonical records
//!
//! Every function here is pure: no I/O, no shared state, safe to call from
//! any thread.

mod activity;
mod user;

pub use activity::{normalize_activity, normalize_activity_json};
pub use user::{normalize_user, normalize_user_json, normalize_users, normalize_users_json};

/// Default cap on buttons per activity, the presence platform's limit
pub const DEFAULT_MAX_BUTTONS: usize = 2;

/// Limits applied while normalizing activities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityLimits {
    pub max_buttons: usize,
}

impl ActivityLimits {
    #[must_use]
    pub const fn new(max_buttons: usize) -> Self {
        Self { max_buttons }
    }
}

impl Default for ActivityLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BUTTONS)
    }
}
