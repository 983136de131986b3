//! Author lookup backed by the commits API

use async_trait::async_trait;
use herald_core::error::NotesError;
use herald_core::Repository;
use herald_notes::AuthorLookup;

use crate::client::GitHubClient;
use crate::error::{GitHubError, Result};

/// Resolves commit authors of one repository through GitHub
#[derive(Clone)]
pub struct CommitAuthors {
    client: GitHubClient,
    repository: Repository,
}

impl CommitAuthors {
    /// Create a lookup for `repository`
    pub fn new(client: GitHubClient, repository: Repository) -> Self {
        Self { client, repository }
    }

    async fn fetch_login(&self, hash: &str) -> Result<String> {
        let commit = self.client.get_commit(&self.repository, hash).await?;
        commit
            .author
            .map(|author| author.login)
            .ok_or_else(|| GitHubError::MissingAuthor(hash.to_string()))
    }
}

#[async_trait]
impl AuthorLookup for CommitAuthors {
    async fn login_for(&self, hash: &str) -> herald_core::Result<String> {
        self.fetch_login(hash).await.map_err(|e| {
            NotesError::AuthorLookup {
                hash: hash.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::GitHubConfig;
    use herald_core::HeraldError;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn lookup_for(server: &MockServer) -> CommitAuthors {
        let client = GitHubClient::new(GitHubConfig::new(server.uri(), "secret")).unwrap();
        CommitAuthors::new(
            client,
            Repository {
                owner: "acme".to_string(),
                name: "rocket".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_login_for() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/rocket/commits/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sha": "abc123",
                "author": {"login": "octocat"}
            })))
            .mount(&server)
            .await;

        let login = lookup_for(&server).await.login_for("abc123").await.unwrap();
        assert_eq!(login, "octocat");
    }

    #[tokio::test]
    async fn test_unlinked_author_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/rocket/commits/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sha": "abc123",
                "author": null
            })))
            .mount(&server)
            .await;

        let result = lookup_for(&server).await.login_for("abc123").await;
        assert!(matches!(
            result,
            Err(HeraldError::Notes(NotesError::AuthorLookup { .. }))
        ));
    }

    #[tokio::test]
    async fn test_api_failure_maps_to_notes_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/rocket/commits/abc123"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
            .mount(&server)
            .await;

        let err = lookup_for(&server).await.login_for("abc123").await.unwrap_err();
        assert!(err.to_string().contains("Not Found"));
    }
}
