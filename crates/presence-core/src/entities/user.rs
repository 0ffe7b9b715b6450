//! User entity - the canonical presence user record

use serde::{Deserialize, Serialize};

/// Canonical user record
///
/// Every field is always populated. Fields the source did not provide hold
/// the empty-string sentinel, so consumers never branch on presence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub avatar: String,
    pub username: String,
    pub discriminator: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub flags: u64,
}

fn is_zero(flags: &u64) -> bool {
    *flags == 0
}

impl User {
    /// Create a user with only an id; every other field is the sentinel
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Get the display tag: username#discriminator
    ///
    /// Accounts migrated off discriminators report `"0"`; those render as the
    /// bare username.
    pub fn tag(&self) -> String {
        if self.discriminator.is_empty() || self.discriminator == "0" {
            self.username.clone()
        } else {
            format!("{}#{}", self.username, self.discriminator)
        }
    }

    /// Check if an avatar reference is present
    #[inline]
    pub fn has_avatar(&self) -> bool {
        !self.avatar.is_empty()
    }

    /// Check if any of the optional fields still hold the sentinel
    pub fn is_sparse(&self) -> bool {
        self.avatar.is_empty() || self.username.is_empty() || self.discriminator.is_empty()
    }
}
