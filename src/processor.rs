//! Submission processing
//!
//! The top-level flow for one PR event:
//! 1. Extract the app data block; comment and stop if there is none
//! 2. Validate it; comment with the reason and stop if it is rejected
//! 3. Load the catalog, append, rewrite the file, commit and push
//!
//! Nothing is posted on success. Comment and git failures are logged and do
//! not change the outcome.

use crate::catalog::{Catalog, CatalogLoad, CatalogStore};
use crate::config::BotConfig;
use crate::error::Result;
use crate::platform::CommentPoster;
use crate::repo::CommitPush;
use crate::submission::{AppEntry, ValidationError, extract_app_data, validate_app_data};
use crate::types::PullRequestInfo;
use tracing::{debug, info, warn};

/// Comment posted when the description has no usable JSON block
pub const MISSING_DATA_COMMENT: &str = "Please include app data in JSON format within triple \
     backticks (```json ... ```) in the PR description.";

/// Comment posted when validation fails
pub fn rejection_comment(err: &ValidationError) -> String {
    format!("Error: {err}. Please correct the app data.")
}

/// What happened to a submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Entry appended and the catalog rewritten
    Added {
        /// The appended entry
        entry: AppEntry,
        /// Catalog size after the append
        entry_count: usize,
    },
    /// No JSON block, or the block did not parse
    MissingData,
    /// The block parsed but failed validation
    Rejected(ValidationError),
}

/// Processes PR events against one catalog
pub struct SubmissionProcessor<'a> {
    config: BotConfig,
    store: CatalogStore,
    comments: &'a dyn CommentPoster,
    vcs: &'a dyn CommitPush,
}

impl<'a> SubmissionProcessor<'a> {
    /// Processor writing to `config.catalog_path`
    pub fn new(
        config: BotConfig,
        comments: &'a dyn CommentPoster,
        vcs: &'a dyn CommitPush,
    ) -> Self {
        let store = CatalogStore::new(config.catalog_path.clone());
        Self {
            config,
            store,
            comments,
            vcs,
        }
    }

    /// Handle one pull request
    ///
    /// Only fails when the catalog file cannot be written.
    pub async fn process(&self, pr: &PullRequestInfo) -> Result<SubmissionOutcome> {
        let Some(data) = extract_app_data(&pr.body) else {
            info!("No valid app data found in PR #{}", pr.number);
            self.notify(pr.number, MISSING_DATA_COMMENT).await;
            return Ok(SubmissionOutcome::MissingData);
        };

        let entry = match validate_app_data(data) {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Error processing PR #{}: {err}", pr.number);
                self.notify(pr.number, &rejection_comment(&err)).await;
                return Ok(SubmissionOutcome::Rejected(err));
            }
        };

        let mut catalog = self.load_catalog();
        catalog.append(entry.clone());
        self.persist(&catalog, pr).await?;

        info!(
            "App data for {} added to {} from PR #{}",
            entry.name(),
            self.store.path().display(),
            pr.number
        );
        Ok(SubmissionOutcome::Added {
            entry,
            entry_count: catalog.len(),
        })
    }

    fn load_catalog(&self) -> Catalog {
        let load = self.store.load();
        match &load {
            CatalogLoad::Empty => {
                info!("{} not found, starting a new catalog", self.store.path().display());
            }
            CatalogLoad::Corrupt(reason) => {
                warn!("{}: {reason}; starting a new catalog", self.store.path().display());
            }
            CatalogLoad::Loaded(catalog) => {
                info!("Loaded {} catalog entries", catalog.len());
            }
        }
        load.into_catalog()
    }

    async fn persist(&self, catalog: &Catalog, pr: &PullRequestInfo) -> Result<()> {
        let message = self.config.commit_message(pr.number);

        if self.config.dry_run {
            info!(
                "Dry run: would write {} entries to {} and push \"{message}\" to {}",
                catalog.len(),
                self.store.path().display(),
                pr.head_ref
            );
            return Ok(());
        }

        self.store.save(catalog)?;

        if let Err(e) = self.vcs.commit_and_push(&pr.head_ref, &message).await {
            warn!("Catalog change was not pushed to {}: {e}", pr.head_ref);
        }
        Ok(())
    }

    async fn notify(&self, pr_number: u64, body: &str) {
        if self.config.dry_run {
            info!("Dry run: would comment on PR #{pr_number}: {body}");
            return;
        }

        let platform = self.comments.config();
        debug!(
            "Commenting on {}/{} #{pr_number}",
            platform.owner, platform.repo
        );
        if let Err(e) = self.comments.post_comment(pr_number, body).await {
            warn!("Failed to add comment: {e}");
        }
    }
}
