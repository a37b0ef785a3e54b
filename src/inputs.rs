//! Action inputs and the validated run configuration built from them.

use std::fmt;
use std::path::PathBuf;

use crate::error::{LintCheckError, Result};

/// API base used when none is supplied.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Raw, unvalidated inputs as supplied by the host.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub pattern: Option<String>,
    pub config_file: Option<String>,
    pub token: Option<String>,
    pub repository: Option<String>,
    pub sha: Option<String>,
    pub api_url: Option<String>,
}

/// Access token for the check run API. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Commit the check run is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    pub owner: String,
    pub repo: String,
    pub head_sha: String,
}

impl RepoContext {
    /// Build a context from an `owner/repo` slug.
    ///
    /// # Errors
    /// Returns an error if the slug is not exactly two non-empty segments.
    pub fn from_slug(slug: &str, head_sha: &str) -> Result<Self> {
        match slug.trim().split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                    head_sha: head_sha.to_string(),
                })
            }
            _ => Err(LintCheckError::Config(format!(
                "repository must be in 'owner/repo' form, got '{slug}'"
            ))),
        }
    }
}

/// Validated configuration of one run.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub file_pattern: String,
    pub base_config_path: Option<PathBuf>,
    pub credential: Credential,
    pub context: RepoContext,
    pub api_url: String,
}

impl Configuration {
    /// Validate `inputs`.
    ///
    /// Required inputs are checked in order: pattern, token, repository, sha.
    /// Blank values count as missing; a blank config file means none.
    ///
    /// # Errors
    /// Returns the first missing input, or a malformed repository slug.
    pub fn from_inputs(inputs: Inputs) -> Result<Self> {
        let file_pattern = required(inputs.pattern, "pattern")?;
        let token = required(inputs.token, "token")?;
        let repository = required(inputs.repository, "repository")?;
        let sha = required(inputs.sha, "sha")?;

        Ok(Self {
            file_pattern,
            base_config_path: non_blank(inputs.config_file).map(PathBuf::from),
            credential: Credential::new(token),
            context: RepoContext::from_slug(&repository, &sha)?,
            api_url: non_blank(inputs.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(value: Option<String>, name: &'static str) -> Result<String> {
    non_blank(value).ok_or(LintCheckError::MissingInput(name))
}

#[cfg(test)]
#[path = "inputs_tests.rs"]
mod tests;
