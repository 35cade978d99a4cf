//! Platform detection from remote URLs
//!
//! Used when the repository is not given explicitly and the webhook payload
//! does not name it either.

use crate::error::{Error, Result};
use crate::types::{Platform, PlatformConfig};
use regex::Regex;
use std::env;

/// Detect platform (GitHub or GitLab) from a remote URL
///
/// `GH_HOST` and `GITLAB_HOST` name additional self-hosted instances.
pub fn detect_platform(url: &str) -> Option<Platform> {
    let gh_host = env::var("GH_HOST").ok();
    let gitlab_host = env::var("GITLAB_HOST").ok();

    let hostname = extract_hostname(url)?;

    if hostname == "github.com"
        || hostname.ends_with(".github.com")
        || gh_host.as_ref().is_some_and(|h| hostname == *h)
    {
        return Some(Platform::GitHub);
    }

    if hostname == "gitlab.com"
        || hostname.ends_with(".gitlab.com")
        || gitlab_host.as_ref().is_some_and(|h| hostname == *h)
    {
        return Some(Platform::GitLab);
    }

    None
}

/// Parse repository info (owner/repo) from a remote URL
pub fn parse_repo_info(url: &str) -> Result<PlatformConfig> {
    let platform = detect_platform(url).ok_or(Error::NoSupportedRemotes)?;
    let hostname = extract_hostname(url);

    // SSH format: git@host:owner/repo.git
    // HTTPS format: https://host/owner/repo.git
    let re_ssh = Regex::new(r"git@[^:]+:(.+?)(?:\.git)?/?$")
        .map_err(|e| Error::Parse(e.to_string()))?;
    let re_https = Regex::new(r"https?://[^/]+/(.+?)(?:\.git)?/?$")
        .map_err(|e| Error::Parse(e.to_string()))?;

    let path = re_ssh
        .captures(url)
        .or_else(|| re_https.captures(url))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::Parse(format!("cannot parse remote URL: {url}")))?;

    let default_host = match platform {
        Platform::GitHub => "github.com",
        Platform::GitLab => "gitlab.com",
    };
    let host = hostname.filter(|h| h != default_host);

    PlatformConfig::from_path(platform, path, host)
        .ok_or_else(|| Error::Parse(format!("invalid repo path: {path}")))
}

fn extract_hostname(url: &str) -> Option<String> {
    // SSH format
    if let Some(rest) = url.strip_prefix("git@") {
        return rest.split(':').next().map(ToString::to_string);
    }

    // HTTPS format
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_github_https() {
        assert_eq!(
            detect_platform("https://github.com/owner/repo.git"),
            Some(Platform::GitHub)
        );
    }

    #[test]
    fn test_detect_github_ssh() {
        assert_eq!(
            detect_platform("git@github.com:owner/repo.git"),
            Some(Platform::GitHub)
        );
    }

    #[test]
    fn test_detect_gitlab_https() {
        assert_eq!(
            detect_platform("https://gitlab.com/owner/repo.git"),
            Some(Platform::GitLab)
        );
    }

    #[test]
    fn test_detect_unknown_host() {
        assert_eq!(detect_platform("https://example.org/owner/repo.git"), None);
        assert!(matches!(
            parse_repo_info("https://example.org/owner/repo.git"),
            Err(Error::NoSupportedRemotes)
        ));
    }

    #[test]
    fn test_parse_github_repo() {
        let config = parse_repo_info("https://github.com/xamyl/appdoohickey.git").unwrap();
        assert_eq!(config.platform, Platform::GitHub);
        assert_eq!(config.owner, "xamyl");
        assert_eq!(config.repo, "appdoohickey");
        assert!(config.host.is_none());
    }

    #[test]
    fn test_parse_github_ssh_without_suffix() {
        let config = parse_repo_info("git@github.com:xamyl/appdoohickey").unwrap();
        assert_eq!(config.owner, "xamyl");
        assert_eq!(config.repo, "appdoohickey");
    }

    #[test]
    fn test_parse_gitlab_nested_groups() {
        let config = parse_repo_info("https://gitlab.com/group/subgroup/repo.git").unwrap();
        assert_eq!(config.platform, Platform::GitLab);
        assert_eq!(config.owner, "group/subgroup");
        assert_eq!(config.repo, "repo");
    }

    #[test]
    fn test_parse_enterprise_subdomain_keeps_host() {
        let config = parse_repo_info("https://code.github.com/owner/repo").unwrap();
        assert_eq!(config.host.as_deref(), Some("code.github.com"));
    }
}
