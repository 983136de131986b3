//! GitHub REST API client for Herald
//!
//! Covers the two endpoints a tag release needs: creating the release and
//! looking up the author of a commit for `{author}` enrichment.
//!
//! ## Usage
//!
//! ```ignore
//! use herald_github::{CreateRelease, GitHubClient, GitHubConfig};
//!
//! let client = GitHubClient::new(GitHubConfig::new(api_url, token))?;
//! let release = client.create_release(&repository, &request).await?;
//! ```

mod authors;
mod client;
pub mod error;
pub mod types;

pub use authors::CommitAuthors;
pub use client::{GitHubClient, GitHubConfig};
pub use error::{GitHubError, Result};
pub use types::{CommitAuthor, CommitResponse, CreateRelease, Release};
