//! Comment poster factory

use crate::auth::CredentialProvider;
use crate::platform::{CommentPoster, GitHubCommenter, GitLabCommenter};
use crate::types::{Platform, PlatformConfig};

/// Create the comment poster for a platform
///
/// `api_base` overrides the REST base URL derived from the host.
pub fn create_comment_poster(
    config: &PlatformConfig,
    credentials: Box<dyn CredentialProvider>,
    api_base: Option<&str>,
) -> Box<dyn CommentPoster> {
    match config.platform {
        Platform::GitHub => {
            let commenter = GitHubCommenter::new(config.clone(), credentials);
            Box::new(match api_base {
                Some(base) => commenter.with_api_base(base),
                None => commenter,
            })
        }
        Platform::GitLab => {
            let commenter = GitLabCommenter::new(config.clone(), credentials);
            Box::new(match api_base {
                Some(base) => commenter.with_api_base(base),
                None => commenter,
            })
        }
    }
}
