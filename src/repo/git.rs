//! git CLI implementation of [`CommitPush`]

use crate::error::{Error, Result};
use crate::repo::CommitPush;
use crate::types::CommitterIdentity;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, warn};

/// A git working tree driven through the `git` binary
#[derive(Debug, Clone)]
pub struct GitRepo {
    dir: PathBuf,
    remote: String,
    committer: CommitterIdentity,
    files: Vec<PathBuf>,
}

impl GitRepo {
    /// Working tree at `dir`, pushing to `remote`
    pub fn new(dir: impl Into<PathBuf>, remote: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            remote: remote.into(),
            committer: CommitterIdentity::default(),
            files: Vec::new(),
        }
    }

    /// Commit as `committer`
    #[must_use]
    pub fn with_committer(mut self, committer: CommitterIdentity) -> Self {
        self.committer = committer;
        self
    }

    /// Stage `file` before committing
    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.files.push(file.into());
        self
    }

    /// URL of the configured remote
    pub async fn remote_url(&self) -> Result<String> {
        self.run(&["remote", "get-url", self.remote.as_str()]).await
    }

    async fn run(&self, args: &[&str]) -> Result<String> {
        debug!("git {}", args.join(" "));
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.dir)
            .output()
            .await
            .map_err(|e| Error::Git(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(format!(
                "git {} failed: {}",
                args.join(" "),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl CommitPush for GitRepo {
    /// Runs every step even when an earlier one fails; the failures are
    /// logged and returned together.
    async fn commit_and_push(&self, branch: &str, message: &str) -> Result<()> {
        let refspec = format!("HEAD:{branch}");
        let files: Vec<String> = self
            .files
            .iter()
            .map(|f| f.to_string_lossy().into_owned())
            .collect();

        let mut add = vec!["add", "--"];
        add.extend(files.iter().map(String::as_str));

        let steps: [Vec<&str>; 5] = [
            vec!["config", "user.email", self.committer.email.as_str()],
            vec!["config", "user.name", self.committer.name.as_str()],
            add,
            vec!["commit", "-m", message],
            vec!["push", self.remote.as_str(), refspec.as_str()],
        ];

        let mut failures = Vec::new();
        for step in &steps {
            if let Err(e) = self.run(step).await {
                warn!("{e}");
                failures.push(e.to_string());
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::Git(failures.join("; ")))
        }
    }
}
