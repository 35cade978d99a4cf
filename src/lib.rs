//! app-catalog-bot - app catalog submissions from pull requests
//!
//! Extracts app metadata from a fenced `json` block in a PR description,
//! validates it, appends it to a JSON catalog file, and commits the change
//! back to the PR branch. Failures are reported as PR comments.
//!
//! Side effects sit behind two capabilities so the core stays testable:
//! [`platform::CommentPoster`] and [`repo::CommitPush`].

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod platform;
pub mod processor;
pub mod repo;
pub mod submission;
pub mod types;

pub use error::{Error, Result};
