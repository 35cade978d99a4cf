//! Core types for app-catalog-bot

use serde::{Deserialize, Serialize};

/// The pull request a webhook event is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestInfo {
    /// PR number (GitHub) or MR iid (GitLab)
    pub number: u64,
    /// Description text; empty when the platform sent `null`
    pub body: String,
    /// Source branch the submission was opened from
    pub head_ref: String,
    /// Web URL for the PR/MR, when the payload carries one
    pub html_url: Option<String>,
    /// Repository path (`owner/repo`) from the payload, if present
    pub repository: Option<String>,
}

/// Detected platform type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    /// GitHub or GitHub Enterprise
    GitHub,
    /// GitLab or self-hosted GitLab
    GitLab,
}

/// Platform configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Platform type
    pub platform: Platform,
    /// Repository owner (user, organization, or GitLab group path)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com/gitlab.com)
    pub host: Option<String>,
}

impl PlatformConfig {
    /// Build a config from an `owner/repo` path
    ///
    /// Everything before the last `/` is the owner, so GitLab nested groups
    /// (`group/subgroup/repo`) are kept intact.
    pub fn from_path(platform: Platform, path: &str, host: Option<String>) -> Option<Self> {
        let (owner, repo) = path.trim_matches('/').rsplit_once('/')?;
        if owner.is_empty() || repo.is_empty() {
            return None;
        }
        Some(Self {
            platform,
            owner: owner.to_string(),
            repo: repo.to_string(),
            host,
        })
    }
}

/// Identity used for the bot's catalog commits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitterIdentity {
    /// `user.name`
    pub name: String,
    /// `user.email`
    pub email: String,
}

impl Default for CommitterIdentity {
    fn default() -> Self {
        Self {
            name: "GitHub Actions".to_string(),
            email: "actions@github.com".to_string(),
        }
    }
}
