//! GitHub Actions runtime context
//!
//! Reads the `GITHUB_*` variables the Actions runner exports and derives the
//! web URLs used in release notes.

use tracing::debug;

use crate::error::{ConfigError, Result};

const DEFAULT_SERVER_URL: &str = "https://github.com";
const DEFAULT_API_URL: &str = "https://api.github.com";
const TAG_REF_PREFIX: &str = "refs/tags/";

/// A repository identified by owner and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Owning user or organization
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl Repository {
    /// Parse an `owner/name` slug
    pub fn parse(slug: &str) -> Option<Self> {
        let (owner, name) = slug.trim().split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// The `owner/name` slug
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Values describing the triggering workflow run
#[derive(Debug, Clone)]
pub struct GitHubContext {
    /// Web origin, e.g. `https://github.com`
    pub server_url: String,
    /// REST API origin, e.g. `https://api.github.com`
    pub api_url: String,
    /// Repository the workflow runs in
    pub repository: Option<Repository>,
    /// Fully qualified ref that triggered the run
    pub git_ref: Option<String>,
}

impl GitHubContext {
    /// Read the context from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the context from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let context = Self {
            server_url: non_empty("GITHUB_SERVER_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
            api_url: non_empty("GITHUB_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            repository: non_empty("GITHUB_REPOSITORY").and_then(|s| Repository::parse(&s)),
            git_ref: non_empty("GITHUB_REF"),
        };

        debug!(
            server_url = %context.server_url,
            repository = ?context.repository.as_ref().map(Repository::slug),
            git_ref = ?context.git_ref,
            "resolved GitHub context"
        );
        context
    }

    /// Override the repository
    pub fn with_repository(mut self, repository: Repository) -> Self {
        self.repository = Some(repository);
        self
    }

    /// The repository, required for anything that builds links or calls the API
    pub fn repository(&self) -> Result<&Repository> {
        self.repository
            .as_ref()
            .ok_or_else(|| ConfigError::MissingEnv("GITHUB_REPOSITORY".to_string()).into())
    }

    /// Web URL of the repository
    pub fn repo_url(&self) -> Result<String> {
        let repo = self.repository()?;
        Ok(format!("{}/{}", self.server_url, repo.slug()))
    }

    /// Tag name when the run was triggered by a tag push
    pub fn pushed_tag(&self) -> Option<&str> {
        self.git_ref
            .as_deref()
            .and_then(|r| r.strip_prefix(TAG_REF_PREFIX))
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn context_from(vars: &[(&str, &str)]) -> GitHubContext {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GitHubContext::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let context = context_from(&[]);
        assert_eq!(context.server_url, "https://github.com");
        assert_eq!(context.api_url, "https://api.github.com");
        assert!(context.repository().is_err());
        assert!(context.pushed_tag().is_none());
    }

    #[test]
    fn test_repo_url() {
        let context = context_from(&[
            ("GITHUB_SERVER_URL", "https://ghe.example.com/"),
            ("GITHUB_REPOSITORY", "acme/rocket"),
        ]);
        assert_eq!(context.repo_url().unwrap(), "https://ghe.example.com/acme/rocket");
    }

    #[test]
    fn test_pushed_tag() {
        let context = context_from(&[("GITHUB_REF", "refs/tags/v1.4.0")]);
        assert_eq!(context.pushed_tag(), Some("v1.4.0"));

        let branch = context_from(&[("GITHUB_REF", "refs/heads/main")]);
        assert_eq!(branch.pushed_tag(), None);
    }

    #[test]
    fn test_repository_parse() {
        assert_eq!(
            Repository::parse("acme/rocket"),
            Some(Repository {
                owner: "acme".to_string(),
                name: "rocket".to_string()
            })
        );
        assert_eq!(Repository::parse("acme"), None);
        assert_eq!(Repository::parse("/rocket"), None);
        assert_eq!(Repository::parse("a/b/c"), None);
    }
}
