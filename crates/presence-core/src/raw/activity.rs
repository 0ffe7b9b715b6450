//! Raw activity shapes as they arrive from a presence collaborator

use serde::Deserialize;

use crate::entities::{Activity, Button, Party};

/// An activity in either of the two upstream declarations
///
/// The complete shape is strict (`deny_unknown_fields`) so that an input
/// carrying `party` or the `*_image_key` asset names is never truncated into
/// it; such inputs land in the partial shape instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawActivity {
    Complete(CompleteActivity),
    Partial(PartialActivity),
}

/// Fully-required declaration: the shape the desktop side publishes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompleteActivity {
    pub state: String,
    pub details: String,
    pub timestamps: CompleteTimestamps,
    pub assets: CompleteAssets,
    pub buttons: Vec<RawButton>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompleteTimestamps {
    pub start: u64,
    pub end: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompleteAssets {
    pub large_image: String,
    pub large_text: String,
    pub small_image: String,
    pub small_text: String,
}

/// Fully-optional declaration: the shape the web front end builds
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PartialActivity {
    pub state: Option<String>,
    pub details: Option<String>,
    pub timestamps: Option<PartialTimestamps>,
    pub assets: Option<PartialAssets>,
    pub party: Option<Party>,
    pub buttons: Option<Vec<RawButton>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct PartialTimestamps {
    pub start: Option<u64>,
    pub end: Option<u64>,
}

/// Assets under either naming convention
///
/// `*_image_key` and `*_text` name the same slot in the two declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PartialAssets {
    pub large_image: Option<String>,
    pub large_image_key: Option<String>,
    pub large_text: Option<String>,
    pub small_image: Option<String>,
    pub small_image_key: Option<String>,
    pub small_text: Option<String>,
}

/// A button whose fields may be missing; emptiness is checked on normalization
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RawButton {
    pub label: Option<String>,
    pub url: Option<String>,
}

impl From<Button> for RawButton {
    fn from(button: Button) -> Self {
        Self {
            label: Some(button.label),
            url: Some(button.url),
        }
    }
}

impl RawActivity {
    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

impl From<Activity> for RawActivity {
    fn from(activity: Activity) -> Self {
        Self::Partial(PartialActivity {
            state: Some(activity.state),
            details: Some(activity.details),
            timestamps: Some(PartialTimestamps {
                start: activity.timestamps.start,
                end: activity.timestamps.end,
            }),
            assets: Some(PartialAssets {
                large_image: Some(activity.assets.large_image),
                large_image_key: None,
                large_text: Some(activity.assets.large_text),
                small_image: Some(activity.assets.small_image),
                small_image_key: None,
                small_text: Some(activity.assets.small_text),
            }),
            party: activity.party,
            buttons: Some(activity.buttons.into_iter().map(RawButton::from).collect()),
        })
    }
}

impl From<CompleteActivity> for RawActivity {
    fn from(activity: CompleteActivity) -> Self {
        Self::Complete(activity)
    }
}

impl From<PartialActivity> for RawActivity {
    fn from(activity: PartialActivity) -> Self {
        Self::Partial(activity)
    }
}
