//! Raw input variants
//!
//! Upstream declares `User` and `Activity` twice: once with every field
//! required and once with every field optional. Both arrive here as one
//! tagged union per record and are reconciled by [`crate::normalize`].

mod activity;
mod user;

pub use activity::{
    CompleteActivity, CompleteAssets, CompleteTimestamps, PartialActivity, PartialAssets,
    PartialTimestamps, RawActivity, RawButton,
};
pub use user::{CompleteUser, PartialUser, RawUser};
