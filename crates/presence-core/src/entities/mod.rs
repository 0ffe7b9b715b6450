//! Domain entities - canonical presence records

mod activity;
mod user;
mod wire;

pub use activity::{Activity, Assets, Button, Party, Timestamps};
pub use user::User;
pub use wire::{WireActivity, WireAssets, WireTimestamps};
