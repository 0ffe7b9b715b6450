//! Wire representation of an activity
//!
//! The compact form published to a presence provider: unset timestamps,
//! empty strings, empty button lists and absent parties are left out.

use serde::Serialize;

use super::activity::{Activity, Assets, Button, Party, Timestamps};

#[derive(Debug, Serialize)]
pub struct WireActivity<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    pub state: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub details: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<WireTimestamps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<WireAssets<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<&'a Party>,
    #[serde(skip_serializing_if = "<[Button]>::is_empty")]
    pub buttons: &'a [Button],
}

#[derive(Debug, Serialize)]
pub struct WireTimestamps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct WireAssets<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    pub large_image: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub large_text: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub small_image: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub small_text: &'a str,
}

impl<'a> From<&'a Activity> for WireActivity<'a> {
    fn from(activity: &'a Activity) -> Self {
        Self {
            state: &activity.state,
            details: &activity.details,
            timestamps: wire_timestamps(activity.timestamps),
            assets: wire_assets(&activity.assets),
            party: activity.party.as_ref(),
            buttons: &activity.buttons,
        }
    }
}

fn wire_timestamps(timestamps: Timestamps) -> Option<WireTimestamps> {
    (!timestamps.is_empty()).then_some(WireTimestamps {
        start: timestamps.start,
        end: timestamps.end,
    })
}

fn wire_assets(assets: &Assets) -> Option<WireAssets<'_>> {
    (!assets.is_empty()).then(|| WireAssets {
        large_image: &assets.large_image,
        large_text: &assets.large_text,
        small_image: &assets.small_image,
        small_text: &assets.small_text,
    })
}

impl Activity {
    /// Borrowing wire view of this activity
    pub fn to_wire(&self) -> WireActivity<'_> {
        WireActivity::from(self)
    }

    /// Serialize the wire view to a JSON value
    pub fn to_wire_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self.to_wire())
    }
}
