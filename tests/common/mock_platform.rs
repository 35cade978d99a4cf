//! Mock capabilities for testing
//!
//! These are test utilities - not all are used by every test binary.

#![allow(dead_code)]

use app_catalog_bot::error::{Error, Result};
use app_catalog_bot::platform::CommentPoster;
use app_catalog_bot::repo::CommitPush;
use app_catalog_bot::types::PlatformConfig;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;

/// Call record for `post_comment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentCall {
    pub pr_number: u64,
    pub body: String,
}

/// Call record for `commit_and_push`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitCall {
    pub branch: String,
    pub message: String,
    /// Contents of the watched file when the commit was requested
    pub file_contents: Option<String>,
}

/// Mock comment poster
///
/// Features:
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockCommentPoster {
    config: PlatformConfig,
    calls: Mutex<Vec<CommentCall>>,
    error_on_post: Mutex<Option<(u16, String)>>,
}

impl MockCommentPoster {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            calls: Mutex::new(Vec::new()),
            error_on_post: Mutex::new(None),
        }
    }

    /// Make `post_comment` answer with a non-201 status
    pub fn fail_post(&self, status: u16, body: &str) {
        *self.error_on_post.lock().unwrap() = Some((status, body.to_string()));
    }

    /// Get all `post_comment` calls
    pub fn get_calls(&self) -> Vec<CommentCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Assert exactly one comment was posted, on `pr_number`, and return its body
    pub fn single_comment(&self, pr_number: u64) -> String {
        let calls = self.get_calls();
        assert_eq!(calls.len(), 1, "Expected one comment but got: {calls:?}");
        assert_eq!(calls[0].pr_number, pr_number);
        calls[0].body.clone()
    }
}

#[async_trait]
impl CommentPoster for MockCommentPoster {
    async fn post_comment(&self, pr_number: u64, body: &str) -> Result<()> {
        self.calls.lock().unwrap().push(CommentCall {
            pr_number,
            body: body.to_string(),
        });

        // Check for injected error
        if let Some((status, body)) = self.error_on_post.lock().unwrap().as_ref() {
            return Err(Error::CommentRejected {
                status: *status,
                body: body.clone(),
            });
        }
        Ok(())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}

/// Mock commit/push capability
pub struct MockCommitPush {
    watch_file: Option<PathBuf>,
    calls: Mutex<Vec<CommitCall>>,
    error_on_push: Mutex<Option<String>>,
}

impl MockCommitPush {
    /// Mock that records nothing but the call arguments
    pub fn new() -> Self {
        Self {
            watch_file: None,
            calls: Mutex::new(Vec::new()),
            error_on_push: Mutex::new(None),
        }
    }

    /// Mock that also records the contents of `file` at commit time
    pub fn watching(file: impl Into<PathBuf>) -> Self {
        Self {
            watch_file: Some(file.into()),
            ..Self::new()
        }
    }

    /// Make `commit_and_push` fail
    pub fn fail_push(&self, msg: &str) {
        *self.error_on_push.lock().unwrap() = Some(msg.to_string());
    }

    /// Get all `commit_and_push` calls
    pub fn get_calls(&self) -> Vec<CommitCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommitPush for MockCommitPush {
    async fn commit_and_push(&self, branch: &str, message: &str) -> Result<()> {
        let file_contents = self
            .watch_file
            .as_ref()
            .and_then(|path| std::fs::read_to_string(path).ok());

        self.calls.lock().unwrap().push(CommitCall {
            branch: branch.to_string(),
            message: message.to_string(),
            file_contents,
        });

        if let Some(msg) = self.error_on_push.lock().unwrap().as_ref() {
            return Err(Error::Git(msg.clone()));
        }
        Ok(())
    }
}
