//! Test fixtures and data generators
//!
//! Raw JSON documents in both upstream shapes.

use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A user in the fully-required shape with a unique id
pub fn complete_user() -> Value {
    let suffix = unique_suffix();
    json!({
        "id": format!("{}", 1_000_000 + suffix),
        "avatar": format!("avatar{suffix}"),
        "username": format!("testuser{suffix}"),
        "discriminator": "0001",
        "flags": 0
    })
}

/// A user in the fully-optional shape carrying only an id
pub fn sparse_user() -> Value {
    json!({ "id": format!("{}", 2_000_000 + unique_suffix()) })
}

/// An activity in the fully-required shape
pub fn complete_activity() -> Value {
    json!({
        "state": "Coding",
        "details": "presence-core",
        "timestamps": { "start": 1_704_067_200_000_u64, "end": 1_704_070_800_000_u64 },
        "assets": {
            "large_image": "logo",
            "large_text": "Editor",
            "small_image": "rust",
            "small_text": "Rust"
        },
        "buttons": [{ "label": "Repo", "url": "https://example.com/repo" }]
    })
}

/// Assets using the `*_image_key` naming
pub fn keyed_assets(large_image: &str, large: &str, small_image: &str, small: &str) -> Value {
    json!({
        "large_image": large_image,
        "large_image_key": large,
        "small_image": small_image,
        "small_image_key": small
    })
}

/// Assets using the `*_text` naming
pub fn texted_assets(large_image: &str, large: &str, small_image: &str, small: &str) -> Value {
    json!({
        "large_image": large_image,
        "large_text": large,
        "small_image": small_image,
        "small_text": small
    })
}

/// An activity with a party of the given size
pub fn party_activity(current: u32, max: u32) -> Value {
    json!({
        "state": "In a group",
        "party": { "size": [current, max] }
    })
}

/// An activity with `count` well-formed buttons
pub fn button_activity(count: usize) -> Value {
    let buttons: Vec<Value> = (0..count)
        .map(|i| json!({ "label": format!("Link {i}"), "url": format!("https://example.com/{i}") }))
        .collect();
    json!({ "state": "Sharing", "buttons": buttons })
}
