//! ClickUp API client.
//!
//! Fetches the tasks of a ClickUp list through the REST API v2. The token is
//! sent as the literal `Authorization` header value, as ClickUp personal
//! tokens expect.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ClickUpError;

/// A task returned by the ClickUp API.
///
/// Only the fields used to build an issue are kept; everything else in the
/// response is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque task identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Task name, used as the issue title.
    pub name: String,
    /// Plain-text rendering of the task description.
    #[serde(default)]
    pub text_content: Option<String>,
    /// Task description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Task {
    /// Body for the GitHub issue created from this task.
    ///
    /// The first non-empty of `text_content` and `description`, else `""`.
    pub fn issue_body(&self) -> &str {
        [self.text_content.as_deref(), self.description.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
struct TasksResponse {
    tasks: Vec<Task>,
}

pub struct ClickUpClient {
    http: Client,
    token: String,
    base_url: String,
}

impl ClickUpClient {
    pub fn new(token: String) -> Result<Self, ClickUpError> {
        Self::with_base_url(token, constants::api::CLICKUP_API_BASE)
    }

    /// Create a client that talks to `base_url` instead of the public API.
    pub fn with_base_url(token: String, base_url: &str) -> Result<Self, ClickUpError> {
        let http = Client::builder()
            .user_agent(constants::api::USER_AGENT)
            .build()
            .map_err(|e| ClickUpError::ClientError(e.to_string()))?;

        Ok(Self {
            http,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch every task of a list, in the order ClickUp returns them.
    pub async fn fetch_tasks(&self, list_id: &str) -> Result<Vec<Task>, ClickUpError> {
        let url = format!("{}/list/{}/task", self.base_url, list_id);
        tracing::debug!(%url, "fetching ClickUp tasks");

        let resp = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, &self.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "ClickUp returned an error status");
            return Err(ClickUpError::Status(status.as_u16()));
        }

        let body: TasksResponse = resp
            .json()
            .await
            .map_err(|e| ClickUpError::ParseError(e.to_string()))?;

        tracing::debug!(count = body.tasks.len(), "fetched ClickUp tasks");
        Ok(body.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(text_content: Option<&str>, description: Option<&str>) -> Task {
        Task {
            id: Some("abc123".to_string()),
            name: "Write docs".to_string(),
            text_content: text_content.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_issue_body_prefers_text_content() {
        assert_eq!(task(Some("x"), Some("y")).issue_body(), "x");
    }

    #[test]
    fn test_issue_body_falls_back_to_description() {
        assert_eq!(task(None, Some("y")).issue_body(), "y");
        assert_eq!(task(Some(""), Some("y")).issue_body(), "y");
    }

    #[test]
    fn test_issue_body_empty_when_neither_present() {
        assert_eq!(task(None, None).issue_body(), "");
        assert_eq!(task(Some(""), Some("")).issue_body(), "");
    }

    #[test]
    fn test_task_deserializes_with_extra_and_null_fields() {
        let json = r#"{
            "id": "86a1",
            "name": "Fix login",
            "text_content": null,
            "description": "Users cannot log in",
            "status": {"status": "open"},
            "tags": []
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.name, "Fix login");
        assert_eq!(task.text_content, None);
        assert_eq!(task.issue_body(), "Users cannot log in");
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let client =
            ClickUpClient::with_base_url("pk_test".to_string(), "http://localhost:1234/").unwrap();
        assert_eq!(client.base_url, "http://localhost:1234");
        assert_eq!(client.token, "pk_test");
    }
}
