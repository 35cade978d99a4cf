//! Process command - handle one PR event

use crate::cli::style::{Stream, Stylize, check, cross, hyperlink_url};
use anstream::{eprintln, println};
use anyhow::{Context, Result, bail};
use app_catalog_bot::auth::{CredentialProvider, StaticCredentials, default_credentials};
use app_catalog_bot::config::BotConfig;
use app_catalog_bot::error::Error;
use app_catalog_bot::event::{WebhookEvent, parse_event};
use app_catalog_bot::platform::{create_comment_poster, parse_repo_info};
use app_catalog_bot::processor::{SubmissionOutcome, SubmissionProcessor};
use app_catalog_bot::repo::GitRepo;
use app_catalog_bot::types::{CommitterIdentity, PlatformConfig, PullRequestInfo};
use std::path::PathBuf;
use tracing::debug;

/// Arguments for a processing run
pub struct ProcessArgs {
    /// Inline webhook payload
    pub payload: Option<String>,
    /// File holding the webhook payload
    pub event_path: Option<PathBuf>,
    /// Catalog file
    pub catalog: PathBuf,
    /// Repository path override (`owner/repo`)
    pub repo: Option<String>,
    /// Self-hosted platform host
    pub host: Option<String>,
    /// REST base URL override
    pub api_url: Option<String>,
    /// Git remote to push to
    pub remote: String,
    /// Commit author
    pub committer: CommitterIdentity,
    /// Explicit API token
    pub token: Option<String>,
    /// Skip all side effects
    pub dry_run: bool,
}

/// Run the process command
pub async fn run_process(args: ProcessArgs) -> Result<()> {
    let payload = read_payload(&args)?;
    let event = parse_event(&payload).context("cannot decode webhook payload")?;
    debug!("Decoded {:?} event for PR #{}", event.platform, event.pull_request.number);

    let git = GitRepo::new(".", args.remote.clone())
        .with_committer(args.committer.clone())
        .with_file(args.catalog.clone());

    let platform = resolve_platform(&event, &args, &git).await?;
    debug!("Repository: {}/{}", platform.owner, platform.repo);

    let credentials: Box<dyn CredentialProvider> = match &args.token {
        Some(token) => Box::new(StaticCredentials::new(token.clone())),
        None => default_credentials(platform.platform, platform.host.as_deref()),
    };
    let comments = create_comment_poster(&platform, credentials, args.api_url.as_deref());

    let config = BotConfig {
        platform,
        catalog_path: args.catalog.clone(),
        committer: args.committer.clone(),
        remote: args.remote.clone(),
        dry_run: args.dry_run,
    };

    let processor = SubmissionProcessor::new(config, comments.as_ref(), &git);
    let outcome = processor
        .process(&event.pull_request)
        .await
        .with_context(|| format!("cannot update {}", args.catalog.display()))?;

    print_summary(&outcome, &event.pull_request, &args);
    Ok(())
}

fn read_payload(args: &ProcessArgs) -> Result<String> {
    if let Some(payload) = &args.payload {
        return Ok(payload.clone());
    }
    if let Some(path) = &args.event_path {
        return std::fs::read_to_string(path)
            .with_context(|| format!("cannot read event payload {}", path.display()));
    }
    bail!("no webhook payload given; pass it as the first argument or set GITHUB_EVENT_PATH")
}

/// Repository from `--repo`, then the payload, then the git remote
async fn resolve_platform(
    event: &WebhookEvent,
    args: &ProcessArgs,
    git: &GitRepo,
) -> Result<PlatformConfig> {
    let named = args
        .repo
        .as_deref()
        .or(event.pull_request.repository.as_deref());

    if let Some(path) = named {
        return PlatformConfig::from_path(event.platform, path, args.host.clone())
            .ok_or_else(|| Error::Config(format!("invalid repository path: {path}")))
            .context("cannot resolve repository");
    }

    let url = git
        .remote_url()
        .await
        .context("repository not given and the git remote cannot be read")?;
    let mut config = parse_repo_info(&url)?;
    if args.host.is_some() {
        config.host.clone_from(&args.host);
    }
    Ok(config)
}

fn print_summary(outcome: &SubmissionOutcome, pr: &PullRequestInfo, args: &ProcessArgs) {
    let pr_num = format!("#{}", pr.number);

    match outcome {
        SubmissionOutcome::Added { entry, entry_count } => {
            println!(
                "{} Added {} {} to {} ({} entries) from PR {}",
                check(),
                entry.name().accent(),
                entry.version().muted(),
                args.catalog.display().accent(),
                entry_count,
                pr_num.accent()
            );
        }
        SubmissionOutcome::MissingData => {
            eprintln!(
                "{} PR {} has no app data block",
                cross(),
                pr_num.accent().for_stderr()
            );
        }
        SubmissionOutcome::Rejected(err) => {
            eprintln!(
                "{} PR {} rejected: {}",
                cross(),
                pr_num.accent().for_stderr(),
                err.error()
            );
        }
    }

    if let Some(url) = &pr.html_url {
        println!("  {}", hyperlink_url(Stream::Stdout, url));
    }

    if args.dry_run {
        eprintln!("{}", "Dry run - no changes were made".warn());
    }
}
