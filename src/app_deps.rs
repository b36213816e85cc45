use anyhow::Result;
use async_trait::async_trait;

use crate::clickup::{ClickUpClient, Task};
use crate::config::CredentialField;
use crate::errors::{ClickUpError, GitHubError};
use crate::github::{GitHubClient, Issue, NewIssue};
use crate::prompt::MenuChoice;

#[async_trait]
pub trait ClickUpApi: Send + Sync {
    async fn fetch_tasks(&self, list_id: &str) -> Result<Vec<Task>, ClickUpError>;
}

pub trait ClickUpApiFactory: Send + Sync {
    fn create(&self, token: String) -> Result<Box<dyn ClickUpApi>, ClickUpError>;
}

#[async_trait]
pub trait GitHubApi: Send + Sync {
    async fn create_issue(&self, issue: &NewIssue) -> Result<Issue, GitHubError>;
    async fn fetch_issues(&self) -> Result<Vec<Issue>, GitHubError>;
}

pub trait GitHubApiFactory: Send + Sync {
    fn create(
        &self,
        token: String,
        owner: String,
        repo: String,
    ) -> Result<Box<dyn GitHubApi>, GitHubError>;
}

pub struct RealClickUpApi {
    inner: ClickUpClient,
}

#[async_trait]
impl ClickUpApi for RealClickUpApi {
    async fn fetch_tasks(&self, list_id: &str) -> Result<Vec<Task>, ClickUpError> {
        self.inner.fetch_tasks(list_id).await
    }
}

/// Builds [`ClickUpClient`]s, optionally against a non-default base URL.
#[derive(Default)]
pub struct RealClickUpApiFactory {
    base_url: Option<String>,
}

impl RealClickUpApiFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }
}

impl ClickUpApiFactory for RealClickUpApiFactory {
    fn create(&self, token: String) -> Result<Box<dyn ClickUpApi>, ClickUpError> {
        let client = match &self.base_url {
            Some(url) => ClickUpClient::with_base_url(token, url)?,
            None => ClickUpClient::new(token)?,
        };
        Ok(Box::new(RealClickUpApi { inner: client }))
    }
}

pub struct RealGitHubApi {
    inner: GitHubClient,
}

#[async_trait]
impl GitHubApi for RealGitHubApi {
    async fn create_issue(&self, issue: &NewIssue) -> Result<Issue, GitHubError> {
        self.inner.create_issue(issue).await
    }

    async fn fetch_issues(&self) -> Result<Vec<Issue>, GitHubError> {
        self.inner.fetch_issues().await
    }
}

/// Builds [`GitHubClient`]s, optionally against a non-default base URL.
#[derive(Default)]
pub struct RealGitHubApiFactory {
    base_url: Option<String>,
}

impl RealGitHubApiFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }
}

impl GitHubApiFactory for RealGitHubApiFactory {
    fn create(
        &self,
        token: String,
        owner: String,
        repo: String,
    ) -> Result<Box<dyn GitHubApi>, GitHubError> {
        let client = match &self.base_url {
            Some(url) => GitHubClient::with_base_url(token, owner, repo, url)?,
            None => GitHubClient::new(token, owner, repo)?,
        };
        Ok(Box::new(RealGitHubApi { inner: client }))
    }
}

pub trait PromptInterface: Send + Sync {
    fn prompt_value(&self, field: CredentialField) -> Result<String>;
    fn select_command(&self) -> Result<MenuChoice>;
}

pub struct RealPrompt;

impl PromptInterface for RealPrompt {
    fn prompt_value(&self, field: CredentialField) -> Result<String> {
        crate::prompt::prompt_required(field)
    }

    fn select_command(&self) -> Result<MenuChoice> {
        crate::prompt::select_command()
    }
}
