//! GitHub REST client

use herald_core::Repository;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, RETRY_AFTER, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::{GitHubError, Result};
use crate::types::{CommitResponse, CreateRelease, Release};

const API_VERSION: &str = "2022-11-28";
const ACCEPT_JSON: &str = "application/vnd.github+json";
const CLIENT_NAME: &str = "herald";

/// GitHub client configuration
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// REST API origin, e.g. `https://api.github.com`
    pub api_url: String,

    /// Token sent as a bearer credential
    pub token: String,
}

impl GitHubConfig {
    /// Create a configuration
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token: token.into(),
        }
    }
}

/// GitHub REST client
#[derive(Clone)]
pub struct GitHubClient {
    base_url: Url,
    token: String,
    client: Client,
}

impl GitHubClient {
    /// Create a new client
    pub fn new(config: GitHubConfig) -> Result<Self> {
        if config.token.trim().is_empty() {
            return Err(GitHubError::ConfigurationError(
                "a GitHub token is required".to_string(),
            ));
        }

        let base_url = Url::parse(&config.api_url)?;
        if base_url.cannot_be_a_base() {
            return Err(GitHubError::ConfigurationError(format!(
                "API URL cannot be used as a base: {}",
                config.api_url
            )));
        }

        Ok(Self {
            base_url,
            token: config.token,
            client: Client::new(),
        })
    }

    /// Build an endpoint URL from path segments, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GitHubError::ConfigurationError(format!("invalid API URL: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Make an authenticated API request
    async fn api_request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        debug!("GitHub API request: {} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, ACCEPT_JSON)
            .header(USER_AGENT, CLIENT_NAME)
            .header("X-GitHub-Api-Version", API_VERSION);

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            if is_rate_limited(status, response.headers()) {
                let retry_after = response
                    .headers()
                    .get(RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok());
                return Err(GitHubError::RateLimited { retry_after });
            }

            let error_text = response.text().await.unwrap_or_default();
            return Err(GitHubError::ApiError {
                status: status.as_u16(),
                message: api_message(&error_text),
            });
        }

        let result = response.json().await?;
        Ok(result)
    }

    /// Create a release
    #[instrument(skip(self, request), fields(repo = %repository.slug(), tag = %request.tag_name))]
    pub async fn create_release(
        &self,
        repository: &Repository,
        request: &CreateRelease,
    ) -> Result<Release> {
        let url = self.endpoint(&["repos", &repository.owner, &repository.name, "releases"])?;
        let body = serde_json::to_value(request)?;

        let release: Release = self.api_request(Method::POST, url, Some(body)).await?;
        info!(id = release.id, url = %release.html_url, "created release");
        Ok(release)
    }

    /// Fetch a single commit
    #[instrument(skip(self), fields(repo = %repository.slug()))]
    pub async fn get_commit(&self, repository: &Repository, reference: &str) -> Result<CommitResponse> {
        let url = self.endpoint(&[
            "repos",
            &repository.owner,
            &repository.name,
            "commits",
            reference,
        ])?;
        self.api_request(Method::GET, url, None).await
    }
}

fn is_rate_limited(status: StatusCode, headers: &HeaderMap) -> bool {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }
    status == StatusCode::FORBIDDEN
        && headers
            .get("x-ratelimit-remaining")
            .is_some_and(|v| v.as_bytes() == b"0")
}

/// Pull the `message` field out of a GitHub error body when there is one
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
