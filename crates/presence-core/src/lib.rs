//! # presence-core
//!
//! Canonical rich presence data model: `User` and `Activity` records, the raw
//! shapes they arrive in, and the normalization that reconciles the two.
//! This crate has zero dependencies on infrastructure (I/O, config, runtime).

pub mod entities;
pub mod error;
pub mod normalize;
pub mod raw;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Activity, Assets, Button, Party, Timestamps, User, WireActivity, WireAssets, WireTimestamps,
};
pub use error::{DomainError, DomainResult};
pub use normalize::{
    normalize_activity, normalize_activity_json, normalize_user, normalize_user_json,
    normalize_users, normalize_users_json, ActivityLimits, DEFAULT_MAX_BUTTONS,
};
pub use raw::{
    CompleteActivity, CompleteAssets, CompleteTimestamps, CompleteUser, PartialActivity,
    PartialAssets, PartialTimestamps, PartialUser, RawActivity, RawButton, RawUser,
};
pub use value_objects::PartySize;
