//! GitHub client error types

use thiserror::Error;

/// GitHub API errors
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Client configuration is unusable
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// API returned a non-success status
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Rate limited by the API
    #[error("Rate limited, retry after {retry_after:?} seconds")]
    RateLimited { retry_after: Option<u64> },

    /// Commit has no linked GitHub account
    #[error("Commit {0} has no associated GitHub user")]
    MissingAuthor(String),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL error
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, GitHubError>;
