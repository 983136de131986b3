//! GitHub API payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /repos/{owner}/{repo}/releases`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRelease {
    /// Tag the release points at
    pub tag_name: String,
    /// Release title
    pub name: String,
    /// Markdown release body
    pub body: String,
    /// Create as an unpublished draft
    pub draft: bool,
    /// Mark as a prerelease
    pub prerelease: bool,
}

/// A created release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Release ID
    pub id: u64,
    /// Web page of the release
    pub html_url: String,
    /// Asset upload URL template
    pub upload_url: String,
    /// Tag name
    pub tag_name: String,
    /// Release title
    #[serde(default)]
    pub name: Option<String>,
    /// Draft flag
    #[serde(default)]
    pub draft: bool,
    /// Prerelease flag
    #[serde(default)]
    pub prerelease: bool,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Subset of `GET /repos/{owner}/{repo}/commits/{ref}`
#[derive(Debug, Clone, Deserialize)]
pub struct CommitResponse {
    /// Full commit SHA
    pub sha: String,
    /// GitHub account of the author, absent for unlinked emails
    pub author: Option<CommitAuthor>,
}

/// GitHub account attached to a commit
#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    /// Account login
    pub login: String,
}
