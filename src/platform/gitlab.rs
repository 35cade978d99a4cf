//! GitLab merge request note posting

use crate::auth::{CredentialProvider, DEFAULT_GITLAB_HOST};
use crate::error::Result;
use crate::platform::{CommentPayload, CommentPoster, expect_created, http_client};
use crate::types::PlatformConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// REST base URL for gitlab.com or a self-hosted instance
pub fn gitlab_api_base(host: Option<&str>) -> String {
    format!("https://{}/api/v4", host.unwrap_or(DEFAULT_GITLAB_HOST))
}

/// GitLab note client using reqwest
pub struct GitLabCommenter {
    client: Client,
    api_base: String,
    config: PlatformConfig,
    credentials: Box<dyn CredentialProvider>,
}

impl GitLabCommenter {
    /// Create a commenter for the project in `config`
    pub fn new(config: PlatformConfig, credentials: Box<dyn CredentialProvider>) -> Self {
        Self {
            client: http_client(),
            api_base: gitlab_api_base(config.host.as_deref()),
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

    fn notes_url(&self, mr_iid: u64) -> String {
        let project = format!("{}/{}", self.config.owner, self.config.repo);
        format!(
            "{}/projects/{}/merge_requests/{mr_iid}/notes",
            self.api_base,
            urlencoding::encode(&project)
        )
    }
}

#[async_trait]
impl CommentPoster for GitLabCommenter {
    async fn post_comment(&self, pr_number: u64, body: &str) -> Result<()> {
        let auth = self.credentials.credentials().await?;
        let url = self.notes_url(pr_number);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header("PRIVATE-TOKEN", &auth.token)
            .json(&CommentPayload { body })
            .send()
            .await?;

        expect_created(response).await
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
