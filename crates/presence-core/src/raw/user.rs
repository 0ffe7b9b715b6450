//! Raw user shapes as they arrive from a presence collaborator

use serde::Deserialize;

use crate::entities::User;

/// A user in either of the two upstream declarations
///
/// Deserialized untagged: the complete shape is tried first, and anything
/// that does not carry all four string fields falls back to the partial one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawUser {
    Complete(CompleteUser),
    Partial(PartialUser),
}

/// Fully-required declaration, as returned by the RPC handshake
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompleteUser {
    pub id: String,
    pub avatar: String,
    pub username: String,
    pub discriminator: String,
    #[serde(default)]
    pub flags: u64,
}

/// Fully-optional declaration, as used by the web front end
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PartialUser {
    pub id: Option<String>,
    pub avatar: Option<String>,
    pub username: Option<String>,
    pub discriminator: Option<String>,
    pub flags: Option<u64>,
}

impl RawUser {
    /// The id as supplied, before any validation
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Complete(user) => Some(&user.id),
            Self::Partial(user) => user.id.as_deref(),
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

impl From<User> for RawUser {
    fn from(user: User) -> Self {
        Self::Complete(CompleteUser {
            id: user.id,
            avatar: user.avatar,
            username: user.username,
            discriminator: user.discriminator,
            flags: user.flags,
        })
    }
}

impl From<CompleteUser> for RawUser {
    fn from(user: CompleteUser) -> Self {
        Self::Complete(user)
    }
}

impl From<PartialUser> for RawUser {
    fn from(user: PartialUser) -> Self {
        Self::Partial(user)
    }
}
