//! Version control access
//!
//! The processor hands the rewritten catalog to a [`CommitPush`]; the
//! default implementation drives the `git` CLI.

mod git;

pub use git::GitRepo;

use crate::error::Result;
use async_trait::async_trait;

/// Capability to commit the catalog change and push it to the PR branch
#[async_trait]
pub trait CommitPush: Send + Sync {
    /// Commit staged catalog changes with `message` and push to `branch`
    async fn commit_and_push(&self, branch: &str, message: &str) -> Result<()>;
}
