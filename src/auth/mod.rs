//! Credentials for GitHub and GitLab
//!
//! Supports environment variables (the CI case), CLI-based auth (gh, glab),
//! and explicit tokens. Commenters receive a [`CredentialProvider`] instead
//! of reading the environment themselves.

mod github;
mod gitlab;

pub use github::{
    GITHUB_TOKEN_VARS, GhCliCredentials, github_credentials, github_env_credentials,
};
pub use gitlab::{
    DEFAULT_GITLAB_HOST, GITLAB_TOKEN_VARS, GlabCliCredentials, gitlab_credentials,
    gitlab_env_credentials,
};

use crate::error::{Error, Result};
use crate::types::Platform;
use async_trait::async_trait;
use std::env;

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from CLI tool (gh or glab)
    Cli,
    /// Token from environment variable
    EnvVar,
    /// Token passed in explicitly
    Explicit,
}

/// A resolved credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

/// Capability to produce an API token
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Resolve a token, or `Error::Auth` if none is available
    async fn credentials(&self) -> Result<AuthConfig>;
}

/// A fixed token
pub struct StaticCredentials {
    token: String,
}

impl StaticCredentials {
    /// Provider that always returns `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentials {
    async fn credentials(&self) -> Result<AuthConfig> {
        Ok(AuthConfig {
            token: self.token.clone(),
            source: AuthSource::Explicit,
        })
    }
}

/// Lookup function for environment variables
pub type EnvLookup = fn(&str) -> Option<String>;

fn process_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// First non-empty value among a list of environment variables
pub struct EnvCredentials {
    vars: Vec<&'static str>,
    lookup: EnvLookup,
}

impl EnvCredentials {
    /// Read `vars` from the process environment, in order
    pub fn new(vars: &[&'static str]) -> Self {
        Self::with_lookup(vars, process_env)
    }

    /// Read `vars` through a custom lookup
    pub fn with_lookup(vars: &[&'static str], lookup: EnvLookup) -> Self {
        Self {
            vars: vars.to_vec(),
            lookup,
        }
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentials {
    async fn credentials(&self) -> Result<AuthConfig> {
        self.vars
            .iter()
            .filter_map(|name| (self.lookup)(name))
            .map(|token| token.trim().to_string())
            .find(|token| !token.is_empty())
            .map(|token| AuthConfig {
                token,
                source: AuthSource::EnvVar,
            })
            .ok_or_else(|| Error::Auth(format!("none of {} is set", self.vars.join(", "))))
    }
}

/// Tries providers in order and returns the first token found
pub struct ChainedCredentials {
    providers: Vec<Box<dyn CredentialProvider>>,
    hint: String,
}

impl ChainedCredentials {
    /// Chain `providers`; `hint` is the error message when all of them fail
    pub fn new(providers: Vec<Box<dyn CredentialProvider>>, hint: impl Into<String>) -> Self {
        Self {
            providers,
            hint: hint.into(),
        }
    }
}

#[async_trait]
impl CredentialProvider for ChainedCredentials {
    async fn credentials(&self) -> Result<AuthConfig> {
        for provider in &self.providers {
            if let Ok(config) = provider.credentials().await {
                return Ok(config);
            }
        }
        Err(Error::Auth(self.hint.clone()))
    }
}

/// Default credential chain for a platform
pub fn default_credentials(platform: Platform, host: Option<&str>) -> Box<dyn CredentialProvider> {
    match platform {
        Platform::GitHub => Box::new(github_credentials()),
        Platform::GitLab => Box::new(gitlab_credentials(host)),
    }
}
