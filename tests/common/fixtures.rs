//! Test data factories for app-catalog-bot types
//!
//! These are test utilities - not all are used by every test binary.

#![allow(dead_code)]

use app_catalog_bot::config::BotConfig;
use app_catalog_bot::types::{Platform, PlatformConfig, PullRequestInfo};
use serde_json::{Value, json};
use std::path::Path;

/// A submission that passes validation
pub fn valid_app_json() -> Value {
    json!({
        "name": "Doohickey",
        "description": "A small utility",
        "developer": {
            "name": "Xamyl",
            "url": "https://github.com/xamyl",
            "avatar": "https://github.com/xamyl.png"
        },
        "longDescription": "A small utility that does one thing well.",
        "downloadUrl": "https://example.com/doohickey.zip",
        "version": "1.2.0",
        "releaseDate": "2024-05-01",
        "size": "4.2 MB",
        "requirements": "Windows 10 or later",
        "features": ["Fast startup", "Tiny footprint"],
        "screenshots": ["https://example.com/shot1.png"]
    })
}

/// `valid_app_json` with one top-level field removed
pub fn app_json_without(field: &str) -> Value {
    let mut value = valid_app_json();
    value.as_object_mut().unwrap().remove(field);
    value
}

/// A PR description with `data` in a fenced json block
pub fn pr_body_with(data: &Value) -> String {
    format!(
        "## New app submission\n\n```json\n{}\n```\n\nThanks!",
        serde_json::to_string_pretty(data).unwrap()
    )
}

/// A pull request with the given body
pub fn make_pr(number: u64, body: &str) -> PullRequestInfo {
    PullRequestInfo {
        number,
        body: body.to_string(),
        head_ref: format!("submit-app-{number}"),
        html_url: Some(format!("https://github.com/testowner/testrepo/pull/{number}")),
        repository: Some("testowner/testrepo".to_string()),
    }
}

/// Create a GitHub platform config
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        platform: Platform::GitHub,
        owner: "testowner".to_string(),
        repo: "testrepo".to_string(),
        host: None,
    }
}

/// Create a GitLab platform config
pub fn gitlab_config() -> PlatformConfig {
    PlatformConfig {
        platform: Platform::GitLab,
        owner: "testgroup".to_string(),
        repo: "testrepo".to_string(),
        host: None,
    }
}

/// Bot config writing the catalog to `catalog`
pub fn bot_config(catalog: &Path) -> BotConfig {
    let mut config = BotConfig::new(github_config());
    config.catalog_path = catalog.to_path_buf();
    config
}

/// A GitHub `pull_request` webhook payload
pub fn github_event_payload(number: u64, body: &str, branch: &str) -> String {
    json!({
        "action": "opened",
        "number": number,
        "pull_request": {
            "number": number,
            "body": body,
            "head": { "ref": branch },
            "html_url": format!("https://github.com/testowner/testrepo/pull/{number}")
        },
        "repository": { "full_name": "testowner/testrepo" }
    })
    .to_string()
}
