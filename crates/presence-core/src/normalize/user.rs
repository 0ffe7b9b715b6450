//! User normalization

use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use crate::entities::User;
use crate::error::{DomainError, DomainResult};
use crate::raw::RawUser;

/// Reconcile either user declaration into the canonical record
///
/// Fails if the id is absent, empty, or whitespace. Every other absent
/// field becomes the empty-string sentinel.
pub fn normalize_user(input: RawUser) -> DomainResult<User> {
    let user = match input {
        RawUser::Complete(raw) => User {
            id: raw.id,
            avatar: raw.avatar,
            username: raw.username,
            discriminator: raw.discriminator,
            flags: raw.flags,
        },
        RawUser::Partial(raw) => User {
            id: raw.id.unwrap_or_default(),
            avatar: raw.avatar.unwrap_or_default(),
            username: raw.username.unwrap_or_default(),
            discriminator: raw.discriminator.unwrap_or_default(),
            flags: raw.flags.unwrap_or_default(),
        },
    };

    if user.id.trim().is_empty() {
        return Err(DomainError::MissingUserId);
    }

    if user.is_sparse() {
        debug!(user_id = %user.id, "Filled absent user fields with defaults");
    }

    Ok(user)
}

/// Normalize a collection of users, rejecting repeated ids
pub fn normalize_users<I>(inputs: I) -> DomainResult<Vec<User>>
where
    I: IntoIterator<Item = RawUser>,
{
    let inputs = inputs.into_iter();
    let mut seen = HashSet::with_capacity(inputs.size_hint().0);
    let mut users = Vec::with_capacity(inputs.size_hint().0);

    for input in inputs {
        let user = normalize_user(input)?;
        if !seen.insert(user.id.clone()) {
            return Err(DomainError::DuplicateUserId(user.id));
        }
        users.push(user);
    }

    Ok(users)
}

/// Normalize a user from an arbitrary JSON value
pub fn normalize_user_json(value: &serde_json::Value) -> DomainResult<User> {
    normalize_user(RawUser::deserialize(value)?)
}

/// Normalize a JSON array of users
pub fn normalize_users_json(value: &serde_json::Value) -> DomainResult<Vec<User>> {
    normalize_users(Vec::<RawUser>::deserialize(value)?)
}
