use thiserror::Error;

/// Errors that can occur when working with the ClickUp API.
#[derive(Error, Debug)]
pub enum ClickUpError {
    #[error("HTTP error! Status: {0}")]
    Status(u16),
    #[error("Request failed: {0}")]
    RequestError(String),
    #[error("Failed to parse ClickUp response: {0}")]
    ParseError(String),
    #[error("Failed to create HTTP client: {0}")]
    ClientError(String),
}

/// Errors that can occur when working with the GitHub API.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("GitHub API error (status {status_code}): {message}")]
    ApiError {
        status_code: u16,
        message: String,
        documentation_url: Option<String>,
    },
    #[error("HTTP error! Status: {0}")]
    Status(u16),
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("Failed to parse GitHub response: {0}")]
    ParseError(String),
    #[error("Failed to create GitHub client: {0}")]
    ClientError(String),
}

/// Errors that can occur during input validation.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// A required value was empty. Carries the message shown to the user.
    #[error("{0}")]
    Required(String),
}

/// A failed call to either remote API while syncing.
///
/// Every variant is fatal for the session: the sync stops at the first one.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Error fetching ClickUp tasks: {0}")]
    FetchTasks(ClickUpError),
    #[error("Error creating GitHub issue: {0}")]
    CreateIssue(GitHubError),
    #[error("Error fetching GitHub issues: {0}")]
    FetchIssues(GitHubError),
}

/// Top-level failure of an interactive session.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Sync(#[from] SyncError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RunError {
    /// Process exit code for this failure.
    ///
    /// Remote API failures exit with `1`. Anything else (prompt I/O, config
    /// files) is reported and the process still exits with `0`.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Sync(_) => 1,
            RunError::Other(_) => 0,
        }
    }
}

impl From<octocrab::Error> for GitHubError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => GitHubError::ApiError {
                status_code: source.status_code.as_u16(),
                message: source.message,
                documentation_url: source.documentation_url,
            },
            // The outer message carries a backtrace; report the cause alone.
            _ => GitHubError::HttpError(match std::error::Error::source(&err) {
                Some(source) => source.to_string(),
                None => err.to_string(),
            }),
        }
    }
}

impl From<reqwest::Error> for ClickUpError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ClickUpError::Status(status.as_u16())
        } else if err.is_decode() {
            ClickUpError::ParseError(err.to_string())
        } else {
            ClickUpError::RequestError(err.to_string())
        }
    }
}
