//! Activity entity - the canonical rich presence activity record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::value_objects::PartySize;

/// Canonical activity record
///
/// String fields use the empty-string sentinel. `party` and `buttons` are
/// independently optional; neither implies anything about the other.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Activity {
    pub state: String,
    pub details: String,
    pub timestamps: Timestamps,
    pub assets: Assets,
    pub party: Option<Party>,
    pub buttons: Vec<Button>,
}

impl Activity {
    /// Check if the activity carries nothing displayable
    pub fn is_blank(&self) -> bool {
        self.state.is_empty()
            && self.details.is_empty()
            && self.timestamps.is_empty()
            && self.assets.is_empty()
            && self.party.is_none()
            && self.buttons.is_empty()
    }

    /// Party size, if a party with a size is attached
    pub fn party_size(&self) -> Option<PartySize> {
        self.party.as_ref().and_then(|party| party.size)
    }
}

/// Activity start/end times in Unix epoch milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timestamps {
    pub start: Option<u64>,
    pub end: Option<u64>,
}

impl Timestamps {
    /// Timestamps with `start` set to the current time
    pub fn started_now() -> Self {
        Self {
            start: u64::try_from(Utc::now().timestamp_millis()).ok(),
            end: None,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Check the `start <= end` invariant; vacuously true if either is unset
    pub fn is_ordered(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start.and_then(millis_to_datetime)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end.and_then(millis_to_datetime)
    }

    /// Milliseconds elapsed between `start` and `now_ms`
    pub fn elapsed_ms(&self, now_ms: u64) -> Option<u64> {
        self.start.map(|start| now_ms.saturating_sub(start))
    }
}

fn millis_to_datetime(ms: u64) -> Option<DateTime<Utc>> {
    i64::try_from(ms).ok().and_then(DateTime::from_timestamp_millis)
}

/// Image references and tooltip texts for both size classes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Assets {
    pub large_image: String,
    pub large_text: String,
    pub small_image: String,
    pub small_text: String,
}

impl Assets {
    pub fn is_empty(&self) -> bool {
        self.large_image.is_empty()
            && self.large_text.is_empty()
            && self.small_image.is_empty()
            && self.small_text.is_empty()
    }

    /// Large slot as (image reference, tooltip text)
    pub fn large(&self) -> (&str, &str) {
        (&self.large_image, &self.large_text)
    }

    /// Small slot as (image reference, tooltip text)
    pub fn small(&self) -> (&str, &str) {
        (&self.small_image, &self.small_text)
    }
}

/// Party attached to an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Party {
    pub size: Option<PartySize>,
}

/// Clickable link shown under an activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Button {
    #[validate(length(min = 1, message = "Button label cannot be empty"))]
    pub label: String,

    #[validate(length(min = 1, message = "Button url cannot be empty"))]
    pub url: String,
}

impl Button {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}
