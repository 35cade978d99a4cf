//! GitHub credentials

use crate::auth::{AuthConfig, AuthSource, ChainedCredentials, CredentialProvider, EnvCredentials};
use crate::error::{Error, Result};
use async_trait::async_trait;
use tokio::process::Command;

/// Environment variables checked for a GitHub token, in order
pub const GITHUB_TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// `GITHUB_TOKEN`, then `GH_TOKEN`
pub fn github_env_credentials() -> EnvCredentials {
    EnvCredentials::new(&GITHUB_TOKEN_VARS)
}

/// Get GitHub credentials
///
/// Priority:
/// 1. `GITHUB_TOKEN` environment variable
/// 2. `GH_TOKEN` environment variable
/// 3. gh CLI (`gh auth token`)
pub fn github_credentials() -> ChainedCredentials {
    let providers: Vec<Box<dyn CredentialProvider>> =
        vec![Box::new(github_env_credentials()), Box::new(GhCliCredentials)];
    ChainedCredentials::new(
        providers,
        "No GitHub authentication found. Set GITHUB_TOKEN or run `gh auth login`",
    )
}

/// Token from the gh CLI
pub struct GhCliCredentials;

#[async_trait]
impl CredentialProvider for GhCliCredentials {
    async fn credentials(&self) -> Result<AuthConfig> {
        get_gh_cli_token()
            .await
            .map(|token| AuthConfig {
                token,
                source: AuthSource::Cli,
            })
            .ok_or_else(|| Error::Auth("gh CLI is not available or not logged in".to_string()))
    }
}

async fn get_gh_cli_token() -> Option<String> {
    // Check authenticated
    let status = Command::new("gh")
        .args(["auth", "status"])
        .output()
        .await
        .ok()?;

    if !status.status.success() {
        return None;
    }

    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() { None } else { Some(token) }
}
