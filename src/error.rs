//! Error types for app-catalog-bot

use thiserror::Error;

/// Errors that can occur while processing a submission
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication failed or no credentials were found
    #[error("authentication error: {0}")]
    Auth(String),

    /// Comment endpoint answered with something other than 201 Created
    #[error("comment rejected with status {status}: {body}")]
    CommentRejected {
        /// HTTP status code returned by the platform
        status: u16,
        /// Response body text
        body: String,
    },

    /// HTTP transport error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A git subprocess failed
    #[error("git error: {0}")]
    Git(String),

    /// Filesystem error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Webhook payload is missing or malformed
    #[error("invalid webhook payload: {0}")]
    Payload(String),

    /// Remote URL or repository path could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// Remote URL does not point at a supported platform
    #[error("no supported remote found (GitHub or GitLab)")]
    NoSupportedRemotes,

    /// Configuration is incomplete or inconsistent
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
