use http::StatusCode;
use http::header::AUTHORIZATION;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clickup::Task;
use crate::constants::api::GITHUB_API_BASE;
use crate::errors::GitHubError;

/// An issue as returned by the GitHub API.
///
/// Every field is optional on the wire so that an unexpected response shape
/// never fails an otherwise successful request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Request body for creating an issue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
}

impl From<&Task> for NewIssue {
    fn from(task: &Task) -> Self {
        Self {
            title: task.name.clone(),
            body: task.issue_body().to_string(),
        }
    }
}

/// Error body GitHub sends with most non-2xx responses.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    documentation_url: Option<String>,
}

/// Turn a raw response into `T`, or into an error carrying the status code
/// when the request did not succeed.
fn parse_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, GitHubError> {
    if !status.is_success() {
        return Err(match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(api) => GitHubError::ApiError {
                status_code: status.as_u16(),
                message: api.message,
                documentation_url: api.documentation_url,
            },
            Err(_) => GitHubError::Status(status.as_u16()),
        });
    }

    serde_json::from_str(body).map_err(|e| GitHubError::ParseError(e.to_string()))
}

pub struct GitHubClient {
    octocrab: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubClient {
    pub fn new(token: String, owner: String, repo: String) -> Result<Self, GitHubError> {
        let octocrab = Self::build_octocrab(&token, GITHUB_API_BASE)?;
        Ok(Self::with_octocrab(octocrab, owner, repo))
    }

    /// Create a client that talks to `base_url` instead of api.github.com.
    pub fn with_base_url(
        token: String,
        owner: String,
        repo: String,
        base_url: &str,
    ) -> Result<Self, GitHubError> {
        let octocrab = Self::build_octocrab(&token, base_url)?;
        Ok(Self::with_octocrab(octocrab, owner, repo))
    }

    fn with_octocrab(octocrab: Octocrab, owner: String, repo: String) -> Self {
        Self {
            octocrab,
            owner,
            repo,
        }
    }

    /// Build an Octocrab instance that authenticates with `token <token>` and
    /// never retries a failed request.
    fn build_octocrab(token: &str, base_url: &str) -> Result<Octocrab, GitHubError> {
        Octocrab::builder()
            .add_header(AUTHORIZATION, format!("token {}", token))
            .add_retry_config(RetryConfig::None)
            .base_uri(base_url)?
            .build()
            .map_err(|e| GitHubError::ClientError(e.to_string()))
    }

    /// Repository path in the format "owner/repo".
    pub fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    pub async fn create_issue(&self, issue: &NewIssue) -> Result<Issue, GitHubError> {
        let path = format!("/repos/{}/{}/issues", self.owner, self.repo);
        tracing::debug!(%path, title = %issue.title, "creating GitHub issue");

        let response = self.octocrab._post(path, Some(issue)).await?;
        let status = response.status();
        let body = self.octocrab.body_to_string(response).await?;
        let created: Issue = parse_response(status, &body)?;

        tracing::info!(number = created.number, title = %created.title, "created GitHub issue");
        Ok(created)
    }

    /// Fetch the first page of issues in any state.
    pub async fn fetch_issues(&self) -> Result<Vec<Issue>, GitHubError> {
        let path = format!("/repos/{}/{}/issues?state=all", self.owner, self.repo);
        tracing::debug!(%path, "fetching GitHub issues");

        let response = self.octocrab._get(path).await?;
        let status = response.status();
        let body = self.octocrab.body_to_string(response).await?;

        parse_response(status, &body)
    }
}
