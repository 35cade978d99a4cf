//! GitLab credentials

use crate::auth::{AuthConfig, AuthSource, ChainedCredentials, CredentialProvider, EnvCredentials};
use crate::error::{Error, Result};
use async_trait::async_trait;
use tokio::process::Command;

/// Environment variables checked for a GitLab token, in order
pub const GITLAB_TOKEN_VARS: [&str; 2] = ["GITLAB_TOKEN", "GL_TOKEN"];

/// Default GitLab host
pub const DEFAULT_GITLAB_HOST: &str = "gitlab.com";

/// `GITLAB_TOKEN`, then `GL_TOKEN`
pub fn gitlab_env_credentials() -> EnvCredentials {
    EnvCredentials::new(&GITLAB_TOKEN_VARS)
}

/// Get GitLab credentials
///
/// Priority:
/// 1. `GITLAB_TOKEN` environment variable
/// 2. `GL_TOKEN` environment variable
/// 3. glab CLI (`glab auth token`)
pub fn gitlab_credentials(host: Option<&str>) -> ChainedCredentials {
    let host = host.unwrap_or(DEFAULT_GITLAB_HOST).to_string();
    let providers: Vec<Box<dyn CredentialProvider>> = vec![
        Box::new(gitlab_env_credentials()),
        Box::new(GlabCliCredentials { host }),
    ];
    ChainedCredentials::new(
        providers,
        "No GitLab authentication found. Set GITLAB_TOKEN or run `glab auth login`",
    )
}

/// Token from the glab CLI for a given host
pub struct GlabCliCredentials {
    /// GitLab host (e.g., "gitlab.com")
    pub host: String,
}

#[async_trait]
impl CredentialProvider for GlabCliCredentials {
    async fn credentials(&self) -> Result<AuthConfig> {
        get_glab_cli_token(&self.host)
            .await
            .map(|token| AuthConfig {
                token,
                source: AuthSource::Cli,
            })
            .ok_or_else(|| {
                Error::Auth(format!(
                    "glab CLI is not available or not logged in to {}",
                    self.host
                ))
            })
    }
}

async fn get_glab_cli_token(host: &str) -> Option<String> {
    // Check authenticated
    let status = Command::new("glab")
        .args(["auth", "status", "--hostname", host])
        .output()
        .await
        .ok()?;

    if !status.status.success() {
        return None;
    }

    let output = Command::new("glab")
        .args(["auth", "token", "--hostname", host])
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() { None } else { Some(token) }
}
