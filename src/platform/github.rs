//! GitHub comment posting

use crate::auth::CredentialProvider;
use crate::error::Result;
use crate::platform::{CommentPayload, CommentPoster, expect_created, http_client};
use crate::types::PlatformConfig;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

/// REST base URL for github.com or a GitHub Enterprise host
pub fn github_api_base(host: Option<&str>) -> String {
    host.map_or_else(
        || "https://api.github.com".to_string(),
        |h| format!("https://{h}/api/v3"),
    )
}

/// GitHub issue-comment client using reqwest
pub struct GitHubCommenter {
    client: Client,
    api_base: String,
    config: PlatformConfig,
    credentials: Box<dyn CredentialProvider>,
}

impl GitHubCommenter {
    /// Create a commenter for the repository in `config`
    pub fn new(config: PlatformConfig, credentials: Box<dyn CredentialProvider>) -> Self {
        Self {
            client: http_client(),
            api_base: github_api_base(config.host.as_deref()),
            config,
            credentials,
        }
    }

    /// Use a different REST base URL
    #[must_use]
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    /// REST base URL in use
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn comments_url(&self, pr_number: u64) -> String {
        format!(
            "{}/repos/{}/{}/issues/{pr_number}/comments",
            self.api_base, self.config.owner, self.config.repo
        )
    }
}

#[async_trait]
impl CommentPoster for GitHubCommenter {
    async fn post_comment(&self, pr_number: u64, body: &str) -> Result<()> {
        let auth = self.credentials.credentials().await?;
        let url = self.comments_url(pr_number);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&auth.token)
            .header(ACCEPT, "application/vnd.github+json")
            .json(&CommentPayload { body })
            .send()
            .await?;

        expect_created(response).await
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
