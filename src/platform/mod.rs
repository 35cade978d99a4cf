//! Platform services for GitHub and GitLab
//!
//! The processor only ever needs to leave a comment on the PR/MR it is
//! handling; [`CommentPoster`] is that capability.

mod detection;
mod factory;
mod github;
mod gitlab;

pub use detection::{detect_platform, parse_repo_info};
pub use factory::create_comment_poster;
pub use github::{GitHubCommenter, github_api_base};
pub use gitlab::{GitLabCommenter, gitlab_api_base};

use crate::error::{Error, Result};
use crate::types::PlatformConfig;
use async_trait::async_trait;
use serde::Serialize;

/// Request timeout for platform API calls, in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with API requests (GitHub rejects requests without one)
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Capability to comment on a PR/MR
#[async_trait]
pub trait CommentPoster: Send + Sync {
    /// Post `body` as a comment on PR `pr_number`
    ///
    /// Anything other than 201 Created is `Error::CommentRejected`.
    async fn post_comment(&self, pr_number: u64, body: &str) -> Result<()>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}

#[derive(Serialize)]
struct CommentPayload<'a> {
    body: &'a str,
}

fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Map a comment response to `Ok` on 201 Created
async fn expect_created(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if status == reqwest::StatusCode::CREATED {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::CommentRejected {
        status: status.as_u16(),
        body,
    })
}
