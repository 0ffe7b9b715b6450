//! Activity normalization

use serde::Deserialize;
use tracing::debug;
use validator::Validate;

use super::ActivityLimits;
use crate::entities::{Activity, Assets, Button, Timestamps};
use crate::error::{DomainError, DomainResult};
use crate::raw::{CompleteActivity, PartialActivity, RawActivity, RawButton};

/// Reconcile either activity declaration into the canonical record
///
/// Both asset naming conventions land in the same tooltip-text slot, a
/// timestamp of `0` counts as unset, and `party`/`buttons` are carried over
/// independently.
pub fn normalize_activity(input: RawActivity, limits: &ActivityLimits) -> DomainResult<Activity> {
    let activity = match input {
        RawActivity::Complete(raw) => from_complete(raw),
        RawActivity::Partial(raw) => from_partial(raw)?,
    };

    validate_activity(&activity, limits)?;

    debug!(
        has_party = activity.party.is_some(),
        buttons = activity.buttons.len(),
        "Activity normalized"
    );

    Ok(activity)
}

/// Normalize an activity from an arbitrary JSON value
pub fn normalize_activity_json(
    value: &serde_json::Value,
    limits: &ActivityLimits,
) -> DomainResult<Activity> {
    normalize_activity(RawActivity::deserialize(value)?, limits)
}

fn from_complete(raw: CompleteActivity) -> Activity {
    Activity {
        state: raw.state,
        details: raw.details,
        timestamps: Timestamps {
            start: set_timestamp(Some(raw.timestamps.start)),
            end: set_timestamp(Some(raw.timestamps.end)),
        },
        assets: Assets {
            large_image: raw.assets.large_image,
            large_text: raw.assets.large_text,
            small_image: raw.assets.small_image,
            small_text: raw.assets.small_text,
        },
        party: None,
        buttons: raw.buttons.into_iter().map(to_button).collect(),
    }
}

fn from_partial(raw: PartialActivity) -> DomainResult<Activity> {
    let timestamps = raw.timestamps.unwrap_or_default();
    let assets = raw.assets.unwrap_or_default();

    Ok(Activity {
        state: raw.state.unwrap_or_default(),
        details: raw.details.unwrap_or_default(),
        timestamps: Timestamps {
            start: set_timestamp(timestamps.start),
            end: set_timestamp(timestamps.end),
        },
        assets: Assets {
            large_image: assets.large_image.unwrap_or_default(),
            large_text: reconcile_text(assets.large_image_key, assets.large_text, "large_text")?,
            small_image: assets.small_image.unwrap_or_default(),
            small_text: reconcile_text(assets.small_image_key, assets.small_text, "small_text")?,
        },
        party: raw.party,
        buttons: raw
            .buttons
            .unwrap_or_default()
            .into_iter()
            .map(to_button)
            .collect(),
    })
}

fn set_timestamp(timestamp: Option<u64>) -> Option<u64> {
    timestamp.filter(|&ms| ms != 0)
}

/// Merge the two names of one tooltip slot
///
/// Equal values or a single non-empty value are accepted; two different
/// non-empty values are a conflict.
fn reconcile_text(
    key: Option<String>,
    text: Option<String>,
    slot: &'static str,
) -> DomainResult<String> {
    let key = key.filter(|value| !value.is_empty());
    let text = text.filter(|value| !value.is_empty());

    match (key, text) {
        (Some(key), Some(text)) if key != text => Err(DomainError::ConflictingAsset { slot }),
        (Some(value), _) | (None, Some(value)) => Ok(value),
        (None, None) => Ok(String::new()),
    }
}

fn to_button(raw: RawButton) -> Button {
    Button {
        label: raw.label.unwrap_or_default(),
        url: raw.url.unwrap_or_default(),
    }
}

fn validate_activity(activity: &Activity, limits: &ActivityLimits) -> DomainResult<()> {
    if let Timestamps {
        start: Some(start),
        end: Some(end),
    } = activity.timestamps
    {
        if start > end {
            return Err(DomainError::TimestampsOutOfOrder { start, end });
        }
    }

    if let Some(size) = activity.party_size() {
        if !size.is_ordered() {
            return Err(DomainError::PartySizeOutOfOrder {
                current: size.current,
                max: size.max,
            });
        }
    }

    if activity.buttons.len() > limits.max_buttons {
        return Err(DomainError::TooManyButtons {
            max: limits.max_buttons,
            actual: activity.buttons.len(),
        });
    }

    for (index, button) in activity.buttons.iter().enumerate() {
        button.validate().map_err(|errors| {
            let mut fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(ToString::to_string)
                .collect();
            fields.sort();
            DomainError::EmptyButtonField {
                index,
                field: fields.join(" and "),
            }
        })?;
    }

    Ok(())
}
