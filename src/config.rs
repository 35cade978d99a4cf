//! Bot configuration
//!
//! Everything that identifies where the catalog lives and who commits to it.
//! Built once by the CLI and handed to the processor.

use crate::types::{CommitterIdentity, PlatformConfig};
use std::path::PathBuf;

/// Default catalog file name
pub const DEFAULT_CATALOG_FILE: &str = "apps.json";

/// Default git remote to push to
pub const DEFAULT_REMOTE: &str = "origin";

/// Configuration for a single processor run
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Repository the PR belongs to
    pub platform: PlatformConfig,
    /// Path to the catalog file
    pub catalog_path: PathBuf,
    /// Identity used for the catalog commit
    pub committer: CommitterIdentity,
    /// Git remote to push to
    pub remote: String,
    /// Decide the outcome without writing, pushing, or commenting
    pub dry_run: bool,
}

impl BotConfig {
    /// Config with defaults for everything but the repository
    pub fn new(platform: PlatformConfig) -> Self {
        Self {
            platform,
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILE),
            committer: CommitterIdentity::default(),
            remote: DEFAULT_REMOTE.to_string(),
            dry_run: false,
        }
    }

    /// Commit message for the catalog update of a PR
    pub fn commit_message(&self, pr_number: u64) -> String {
        let file = self
            .catalog_path
            .file_name()
            .map_or_else(
                || DEFAULT_CATALOG_FILE.to_string(),
                |name| name.to_string_lossy().into_owned(),
            );
        format!("Update {file} from PR #{pr_number}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Platform;

    fn config() -> BotConfig {
        BotConfig::new(PlatformConfig {
            platform: Platform::GitHub,
            owner: "owner".to_string(),
            repo: "repo".to_string(),
            host: None,
        })
    }

    #[test]
    fn test_defaults() {
        let config = config();
        assert_eq!(config.catalog_path, PathBuf::from("apps.json"));
        assert_eq!(config.remote, "origin");
        assert_eq!(config.committer.email, "actions@github.com");
        assert!(!config.dry_run);
    }

    #[test]
    fn test_commit_message() {
        assert_eq!(config().commit_message(42), "Update apps.json from PR #42");
    }

    #[test]
    fn test_commit_message_uses_catalog_file_name() {
        let mut config = config();
        config.catalog_path = PathBuf::from("data/catalog.json");
        assert_eq!(config.commit_message(7), "Update catalog.json from PR #7");
    }
}
