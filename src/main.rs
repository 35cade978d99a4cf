//! catalog-bot - app catalog submissions from pull requests
//!
//! CI entry point: reads one PR webhook event, validates the app metadata in
//! its description, and appends it to the JSON catalog. The `list` and `show`
//! subcommands read the catalog back.

use anyhow::Result;
use app_catalog_bot::config::{DEFAULT_CATALOG_FILE, DEFAULT_REMOTE};
use app_catalog_bot::types::CommitterIdentity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "catalog-bot")]
#[command(about = "Add app submissions from PR descriptions to a JSON catalog")]
#[command(version)]
struct Cli {
    /// Webhook payload JSON (GitHub pull_request or GitLab merge_request event)
    payload: Option<String>,

    /// Read the payload from this file when none is given inline
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: Option<PathBuf>,

    /// Catalog file to update or read
    #[arg(long, global = true, default_value = DEFAULT_CATALOG_FILE)]
    catalog: PathBuf,

    /// Repository as owner/name (defaults to the payload's repository)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repo: Option<String>,

    /// GitHub Enterprise or self-hosted GitLab host
    #[arg(long)]
    host: Option<String>,

    /// REST API base URL override
    #[arg(long)]
    api_url: Option<String>,

    /// Git remote to push to
    #[arg(long, default_value = DEFAULT_REMOTE)]
    remote: String,

    /// Commit author name
    #[arg(long)]
    committer_name: Option<String>,

    /// Commit author email
    #[arg(long)]
    committer_email: Option<String>,

    /// API token (defaults to GITHUB_TOKEN / GITLAB_TOKEN or the gh/glab CLI)
    #[arg(long)]
    token: Option<String>,

    /// Dry run - validate and report without writing, pushing, or commenting
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the apps in the catalog
    List,

    /// Show one app's details
    Show {
        /// App name (first entry with this name)
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List) => return cli::run_list(&cli.catalog),
        Some(Commands::Show { name }) => return cli::run_show(&cli.catalog, &name),
        None => {}
    }

    let defaults = CommitterIdentity::default();
    let committer = CommitterIdentity {
        name: cli.committer_name.unwrap_or(defaults.name),
        email: cli.committer_email.unwrap_or(defaults.email),
    };

    cli::run_process(cli::ProcessArgs {
        payload: cli.payload,
        event_path: cli.event_path,
        catalog: cli.catalog,
        repo: cli.repo,
        host: cli.host,
        api_url: cli.api_url,
        remote: cli.remote,
        committer,
        token: cli.token,
        dry_run: cli.dry_run,
    })
    .await
}
