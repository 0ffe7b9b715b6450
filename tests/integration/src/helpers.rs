//! Test helper utilities
//!
//! Shared normalization shortcuts, idempotence assertions, and an in-process
//! CLI runner.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use presence_cli::Cli;
use presence_common::{AppConfig, AppResult};
use presence_core::{
    normalize_activity, normalize_activity_json, normalize_user, normalize_user_json, Activity,
    ActivityLimits, DomainResult, RawActivity, RawUser, User,
};
use serde_json::Value;

use crate::fixtures::unique_suffix;

/// Normalize an activity with the default limits
pub fn activity(value: &Value) -> DomainResult<Activity> {
    normalize_activity_json(value, &ActivityLimits::default())
}

/// Normalize a user
pub fn user(value: &Value) -> DomainResult<User> {
    normalize_user_json(value)
}

/// Assert that a canonical user survives renormalization through both
/// the typed path and its JSON form
pub fn assert_user_idempotent(user: &User) {
    let typed = normalize_user(RawUser::from(user.clone())).expect("typed renormalization");
    assert_eq!(&typed, user);

    let json = serde_json::to_value(user).expect("serialize user");
    let reparsed = normalize_user_json(&json).expect("json renormalization");
    assert_eq!(&reparsed, user);
}

/// Assert that a canonical activity survives renormalization through the
/// typed path, its canonical JSON, and its wire JSON
pub fn assert_activity_idempotent(activity: &Activity) {
    let limits = ActivityLimits::default();

    let typed =
        normalize_activity(RawActivity::from(activity.clone()), &limits).expect("typed renormalization");
    assert_eq!(&typed, activity);

    let canonical = serde_json::to_value(activity).expect("serialize activity");
    assert_eq!(
        &normalize_activity_json(&canonical, &limits).expect("canonical renormalization"),
        activity
    );

    let wire = activity.to_wire_json().expect("serialize wire activity");
    assert_eq!(
        &normalize_activity_json(&wire, &limits).expect("wire renormalization"),
        activity
    );
}

/// Run the CLI in-process with default configuration
pub fn run_cli(args: &[&str], stdin: &str) -> AppResult<String> {
    let cli = Cli::try_parse_from(args).expect("valid command line");
    let config = AppConfig::from_lookup(|_| None)?;
    let mut out = Vec::new();
    cli.execute(&config, &mut stdin.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

/// A JSON document written to the temp directory, removed on drop
pub struct TempJson {
    path: PathBuf,
}

impl TempJson {
    pub fn write(value: &Value) -> Result<Self> {
        let path = std::env::temp_dir().join(format!(
            "presence-test-{}-{}.json",
            std::process::id(),
            unique_suffix()
        ));
        let text = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn path_str(&self) -> &str {
        self.path.to_str().unwrap_or_default()
    }
}

impl Drop for TempJson {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
