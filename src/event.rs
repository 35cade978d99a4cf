//! Webhook payload decoding
//!
//! Accepts the GitHub `pull_request` event and the GitLab `merge_request`
//! event, and reduces either to a [`PullRequestInfo`].

use crate::error::{Error, Result};
use crate::types::{Platform, PullRequestInfo};
use serde::Deserialize;
use serde_json::Value;

/// A decoded webhook event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEvent {
    /// Platform that sent the event
    pub platform: Platform,
    /// The pull request the event is about
    pub pull_request: PullRequestInfo,
}

#[derive(Deserialize)]
struct GitHubPullRequestEvent {
    pull_request: GitHubPullRequest,
    repository: Option<GitHubRepository>,
}

#[derive(Deserialize)]
struct GitHubPullRequest {
    number: u64,
    body: Option<String>,
    head: GitHubBranchRef,
    html_url: Option<String>,
}

#[derive(Deserialize)]
struct GitHubBranchRef {
    #[serde(rename = "ref")]
    ref_field: String,
}

#[derive(Deserialize)]
struct GitHubRepository {
    full_name: String,
}

#[derive(Deserialize)]
struct GitLabMergeRequestEvent {
    object_attributes: GitLabMergeRequest,
    project: Option<GitLabProject>,
}

#[derive(Deserialize)]
struct GitLabMergeRequest {
    iid: u64,
    description: Option<String>,
    source_branch: String,
    url: Option<String>,
}

#[derive(Deserialize)]
struct GitLabProject {
    path_with_namespace: String,
}

/// Decode a webhook payload
pub fn parse_event(payload: &str) -> Result<WebhookEvent> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| Error::Payload(format!("payload is not valid JSON: {e}")))?;

    if value.get("pull_request").is_some() {
        let event: GitHubPullRequestEvent = serde_json::from_value(value)
            .map_err(|e| Error::Payload(format!("malformed pull_request event: {e}")))?;
        let pr = event.pull_request;
        return Ok(WebhookEvent {
            platform: Platform::GitHub,
            pull_request: PullRequestInfo {
                number: pr.number,
                body: pr.body.unwrap_or_default(),
                head_ref: pr.head.ref_field,
                html_url: pr.html_url,
                repository: event.repository.map(|r| r.full_name),
            },
        });
    }

    if value.get("object_attributes").is_some() {
        let event: GitLabMergeRequestEvent = serde_json::from_value(value)
            .map_err(|e| Error::Payload(format!("malformed merge_request event: {e}")))?;
        let mr = event.object_attributes;
        return Ok(WebhookEvent {
            platform: Platform::GitLab,
            pull_request: PullRequestInfo {
                number: mr.iid,
                body: mr.description.unwrap_or_default(),
                head_ref: mr.source_branch,
                html_url: mr.url,
                repository: event.project.map(|p| p.path_with_namespace),
            },
        });
    }

    Err(Error::Payload(
        "expected a pull_request or merge_request event".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_github_event() {
        let payload = json!({
            "action": "opened",
            "pull_request": {
                "number": 12,
                "body": "hello",
                "head": { "ref": "add-my-app" },
                "html_url": "https://github.com/xamyl/appdoohickey/pull/12"
            },
            "repository": { "full_name": "xamyl/appdoohickey" }
        });

        let event = parse_event(&payload.to_string()).unwrap();
        assert_eq!(event.platform, Platform::GitHub);
        assert_eq!(event.pull_request.number, 12);
        assert_eq!(event.pull_request.body, "hello");
        assert_eq!(event.pull_request.head_ref, "add-my-app");
        assert_eq!(
            event.pull_request.repository.as_deref(),
            Some("xamyl/appdoohickey")
        );
    }

    #[test]
    fn test_parse_github_event_null_body() {
        let payload = json!({
            "pull_request": { "number": 3, "body": null, "head": { "ref": "b" } }
        });

        let event = parse_event(&payload.to_string()).unwrap();
        assert_eq!(event.pull_request.body, "");
        assert!(event.pull_request.repository.is_none());
        assert!(event.pull_request.html_url.is_none());
    }

    #[test]
    fn test_parse_gitlab_event() {
        let payload = json!({
            "object_kind": "merge_request",
            "object_attributes": {
                "iid": 5,
                "description": "desc",
                "source_branch": "feature",
                "url": "https://gitlab.com/group/sub/repo/-/merge_requests/5"
            },
            "project": { "path_with_namespace": "group/sub/repo" }
        });

        let event = parse_event(&payload.to_string()).unwrap();
        assert_eq!(event.platform, Platform::GitLab);
        assert_eq!(event.pull_request.number, 5);
        assert_eq!(event.pull_request.head_ref, "feature");
        assert_eq!(event.pull_request.repository.as_deref(), Some("group/sub/repo"));
    }

    #[test]
    fn test_parse_rejects_unrelated_event() {
        let err = parse_event(r#"{"zen": "Keep it logically awesome."}"#).unwrap_err();
        assert!(matches!(err, Error::Payload(_)));
    }

    #[test]
    fn test_parse_rejects_missing_head() {
        let err = parse_event(r#"{"pull_request": {"number": 1, "body": ""}}"#).unwrap_err();
        assert!(matches!(err, Error::Payload(_)));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_event("not json").is_err());
    }
}
