//! Normalization integration tests
//!
//! Exercise the public API of presence-core against documents in both
//! upstream shapes.
//!
//! Run with: cargo test -p integration-tests --test normalization_tests

use integration_tests::*;
use presence_core::{
    normalize_activity_json, normalize_users_json, ActivityLimits, DomainError, PartySize,
};
use serde_json::json;

// ============================================================================
// User Tests
// ============================================================================

#[test]
fn test_sparse_user_scenario() {
    let normalized = user(&json!({ "id": "42", "username": "ada" })).unwrap();
    assert_eq!(
        serde_json::to_value(&normalized).unwrap(),
        json!({ "id": "42", "avatar": "", "username": "ada", "discriminator": "" })
    );
}

#[test]
fn test_users_without_optional_fields_never_fail() {
    for _ in 0..10 {
        let normalized = user(&sparse_user()).unwrap();
        assert!(!normalized.id.is_empty());
        assert_eq!(normalized.avatar, "");
        assert_eq!(normalized.username, "");
        assert_eq!(normalized.discriminator, "");
    }
}

#[test]
fn test_users_without_id_fail() {
    for input in [
        json!({}),
        json!({ "id": "" }),
        json!({ "avatar": "a", "username": "ada", "discriminator": "1" }),
        json!({ "id": "", "avatar": "a", "username": "ada", "discriminator": "1" }),
    ] {
        assert_eq!(user(&input), Err(DomainError::MissingUserId), "input: {input}");
    }
}

#[test]
fn test_complete_user_keeps_every_field() {
    let input = complete_user();
    let normalized = user(&input).unwrap();
    assert_eq!(normalized.id, input["id"]);
    assert_eq!(normalized.avatar, input["avatar"]);
    assert_eq!(normalized.username, input["username"]);
    assert_eq!(normalized.discriminator, "0001");
}

#[test]
fn test_user_idempotence() {
    assert_user_idempotent(&user(&complete_user()).unwrap());
    assert_user_idempotent(&user(&sparse_user()).unwrap());
}

#[test]
fn test_user_collection_unique_ids() {
    let first = complete_user();
    let second = sparse_user();
    let users = normalize_users_json(&json!([first.clone(), second])).unwrap();
    assert_eq!(users.len(), 2);

    let duplicate_id = first["id"].as_str().unwrap().to_string();
    let result = normalize_users_json(&json!([first.clone(), { "id": duplicate_id.clone() }]));
    assert_eq!(result, Err(DomainError::DuplicateUserId(duplicate_id)));
}

// ============================================================================
// Activity Tests
// ============================================================================

#[test]
fn test_reversed_timestamps_scenario() {
    let result = activity(&json!({ "state": "Coding", "timestamps": { "start": 100, "end": 50 } }));
    assert!(matches!(result, Err(DomainError::TimestampsOutOfOrder { .. })));
    assert!(result.unwrap_err().is_validation());
}

#[test]
fn test_timestamp_ordering_property() {
    for (start, end) in [(0_u64, 0_u64), (1, 1), (1, 2), (50, 100), (u64::MAX - 1, u64::MAX)] {
        let input = json!({ "timestamps": { "start": start, "end": end } });
        assert!(activity(&input).is_ok(), "start {start} end {end}");
    }
    for (start, end) in [(2_u64, 1_u64), (100, 50), (u64::MAX, 1)] {
        let input = json!({ "timestamps": { "start": start, "end": end } });
        assert_eq!(
            activity(&input),
            Err(DomainError::TimestampsOutOfOrder { start, end })
        );
    }
    assert!(activity(&json!({ "timestamps": { "start": 100 } })).is_ok());
    assert!(activity(&json!({ "timestamps": { "end": 100 } })).is_ok());
    assert!(activity(&json!({ "timestamps": {} })).is_ok());
}

#[test]
fn test_activity_without_optional_fields_never_fails() {
    for input in [
        json!({}),
        json!({ "state": "Coding" }),
        json!({ "details": "Reviewing" }),
        json!({ "assets": {} }),
        json!({ "party": {} }),
        json!({ "buttons": [] }),
    ] {
        let normalized = activity(&input).unwrap();
        let canonical = serde_json::to_value(&normalized).unwrap();
        for field in ["state", "details", "timestamps", "assets", "party", "buttons"] {
            assert!(canonical.get(field).is_some(), "{field} missing for {input}");
        }
    }
}

#[test]
fn test_asset_naming_transparency() {
    let cases = [
        ("logo", "Editor", "rust", "Rust"),
        ("", "Editor", "", ""),
        ("logo", "", "", "Rust"),
    ];
    for (large_image, large, small_image, small) in cases {
        let keyed = activity(&json!({
            "assets": keyed_assets(large_image, large, small_image, small)
        }))
        .unwrap();
        let texted = activity(&json!({
            "assets": texted_assets(large_image, large, small_image, small)
        }))
        .unwrap();
        assert_eq!(keyed.assets, texted.assets);
        assert_eq!(keyed.assets.large(), (large_image, large));
        assert_eq!(keyed.assets.small(), (small_image, small));
    }
}

#[test]
fn test_party_size_scenarios() {
    let normalized = activity(&party_activity(2, 5)).unwrap();
    let size = normalized.party_size().unwrap();
    assert_eq!((size.current, size.max), (2, 5));
    assert!(normalized.buttons.is_empty());

    assert_eq!(
        activity(&party_activity(5, 2)),
        Err(DomainError::PartySizeOutOfOrder { current: 5, max: 2 })
    );

    assert_eq!(
        activity(&party_activity(0, 0)).unwrap().party_size(),
        Some(PartySize::new(0, 0))
    );
}

#[test]
fn test_buttons_limit_is_configurable() {
    assert!(activity(&button_activity(2)).is_ok());
    assert_eq!(
        activity(&button_activity(3)),
        Err(DomainError::TooManyButtons { max: 2, actual: 3 })
    );

    let normalized = normalize_activity_json(&button_activity(3), &ActivityLimits::new(5)).unwrap();
    assert_eq!(normalized.buttons.len(), 3);
    assert!(normalized.party.is_none());

    assert!(matches!(
        normalize_activity_json(&button_activity(1), &ActivityLimits::new(0)),
        Err(DomainError::TooManyButtons { max: 0, actual: 1 })
    ));
}

#[test]
fn test_button_without_url_fails() {
    let input = json!({ "buttons": [{ "label": "Repo", "url": "" }] });
    assert!(matches!(
        activity(&input),
        Err(DomainError::EmptyButtonField { index: 0, .. })
    ));
}

#[test]
fn test_complete_activity_shape() {
    let normalized = activity(&complete_activity()).unwrap();
    assert_eq!(normalized.state, "Coding");
    assert_eq!(normalized.timestamps.start, Some(1_704_067_200_000));
    assert_eq!(normalized.timestamps.end, Some(1_704_070_800_000));
    assert_eq!(normalized.assets.small(), ("rust", "Rust"));
    assert_eq!(normalized.buttons.len(), 1);
    assert!(normalized.party.is_none());
}

#[test]
fn test_activity_idempotence() {
    assert_activity_idempotent(&activity(&complete_activity()).unwrap());
    assert_activity_idempotent(&activity(&party_activity(2, 5)).unwrap());
    assert_activity_idempotent(&activity(&button_activity(2)).unwrap());
    assert_activity_idempotent(&activity(&json!({})).unwrap());
    assert_activity_idempotent(
        &activity(&json!({
            "assets": keyed_assets("logo", "Editor", "", ""),
            "timestamps": { "start": 10 }
        }))
        .unwrap(),
    );
}
