//! Configuration file parsing and credential sources.
//!
//! The five values a sync needs can come from the environment (optionally
//! loaded from a `.env` file), from the non-secret sections of a TOML config
//! file, or from the interactive prompt. This module handles the first two.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

use crate::constants;
use crate::validation::non_empty;

/// Configuration file structure.
///
/// Tokens are deliberately not read from this file; keep them in `.env` or
/// the environment.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clickup: ClickUpSection,
    #[serde(default)]
    pub github: GitHubSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct ClickUpSection {
    /// ClickUp list to read tasks from.
    #[serde(default)]
    pub list_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GitHubSection {
    /// GitHub username or organization name.
    #[serde(default)]
    pub owner: Option<String>,
    /// Repository name.
    #[serde(default)]
    pub repo: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load the config file found by [`crate::paths::find_config_file`], or
    /// an empty configuration if there is none.
    pub fn load() -> Result<Self> {
        match crate::paths::find_config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

/// One of the five values a sync needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    ClickUpToken,
    ClickUpListId,
    GitHubToken,
    GitHubOwner,
    GitHubRepo,
}

impl CredentialField {
    /// All fields, in prompt order.
    pub const ALL: [CredentialField; 5] = [
        CredentialField::ClickUpToken,
        CredentialField::ClickUpListId,
        CredentialField::GitHubToken,
        CredentialField::GitHubOwner,
        CredentialField::GitHubRepo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CredentialField::ClickUpToken => "ClickUp API token",
            CredentialField::ClickUpListId => "ClickUp list ID",
            CredentialField::GitHubToken => "GitHub Personal Access Token",
            CredentialField::GitHubOwner => "GitHub repository owner",
            CredentialField::GitHubRepo => "GitHub repository name",
        }
    }

    /// Question shown by the interactive prompt.
    pub fn message(self) -> &'static str {
        match self {
            CredentialField::ClickUpToken => "Enter your ClickUp API token:",
            CredentialField::ClickUpListId => "Enter your ClickUp list ID:",
            CredentialField::GitHubToken => "Enter your GitHub Personal Access Token:",
            CredentialField::GitHubOwner => "Enter the GitHub repository owner:",
            CredentialField::GitHubRepo => "Enter the GitHub repository name:",
        }
    }

    /// Message shown when an empty answer is rejected.
    pub fn required_message(self) -> String {
        format!("{} is required", self.label())
    }

    pub fn env_var(self) -> &'static str {
        match self {
            CredentialField::ClickUpToken => constants::env::CLICKUP_TOKEN,
            CredentialField::ClickUpListId => constants::env::CLICKUP_LIST_ID,
            CredentialField::GitHubToken => constants::env::GITHUB_TOKEN,
            CredentialField::GitHubOwner => constants::env::GITHUB_OWNER,
            CredentialField::GitHubRepo => constants::env::GITHUB_REPO,
        }
    }

    /// Secret values are never echoed back to the terminal.
    pub fn is_secret(self) -> bool {
        matches!(
            self,
            CredentialField::ClickUpToken | CredentialField::GitHubToken
        )
    }
}

/// Values known before prompting. Missing entries are asked for interactively.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PartialCredentials {
    pub clickup_token: Option<String>,
    pub clickup_list_id: Option<String>,
    pub github_token: Option<String>,
    pub github_owner: Option<String>,
    pub github_repo: Option<String>,
}

impl PartialCredentials {
    /// Read every field from its environment variable. Empty values count as
    /// absent.
    pub fn from_env() -> Self {
        let mut partial = Self::default();
        for field in CredentialField::ALL {
            let value = env::var(field.env_var()).ok();
            partial.set(field, non_empty(value.as_deref()));
        }
        partial
    }

    /// Non-secret defaults from a config file.
    pub fn from_config(config: &Config) -> Self {
        Self {
            clickup_list_id: non_empty(config.clickup.list_id.as_deref()),
            github_owner: non_empty(config.github.owner.as_deref()),
            github_repo: non_empty(config.github.repo.as_deref()),
            ..Self::default()
        }
    }

    /// Fill the gaps in `self` with values from `fallback`.
    pub fn or(self, fallback: PartialCredentials) -> Self {
        Self {
            clickup_token: self.clickup_token.or(fallback.clickup_token),
            clickup_list_id: self.clickup_list_id.or(fallback.clickup_list_id),
            github_token: self.github_token.or(fallback.github_token),
            github_owner: self.github_owner.or(fallback.github_owner),
            github_repo: self.github_repo.or(fallback.github_repo),
        }
    }

    pub fn get(&self, field: CredentialField) -> Option<&str> {
        match field {
            CredentialField::ClickUpToken => self.clickup_token.as_deref(),
            CredentialField::ClickUpListId => self.clickup_list_id.as_deref(),
            CredentialField::GitHubToken => self.github_token.as_deref(),
            CredentialField::GitHubOwner => self.github_owner.as_deref(),
            CredentialField::GitHubRepo => self.github_repo.as_deref(),
        }
    }

    pub fn set(&mut self, field: CredentialField, value: Option<String>) {
        let slot = match field {
            CredentialField::ClickUpToken => &mut self.clickup_token,
            CredentialField::ClickUpListId => &mut self.clickup_list_id,
            CredentialField::GitHubToken => &mut self.github_token,
            CredentialField::GitHubOwner => &mut self.github_owner,
            CredentialField::GitHubRepo => &mut self.github_repo,
        };
        *slot = value;
    }

    /// Converts into [`Credentials`] once every field is present and non-empty.
    pub fn complete(self) -> Option<Credentials> {
        Some(Credentials {
            clickup_token: non_empty(self.clickup_token.as_deref())?,
            clickup_list_id: non_empty(self.clickup_list_id.as_deref())?,
            github_token: non_empty(self.github_token.as_deref())?,
            github_owner: non_empty(self.github_owner.as_deref())?,
            github_repo: non_empty(self.github_repo.as_deref())?,
        })
    }
}

/// Everything a sync needs. All fields are non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub clickup_token: String,
    pub clickup_list_id: String,
    pub github_token: String,
    pub github_owner: String,
    pub github_repo: String,
}

impl Credentials {
    /// Repository path in the format "owner/repo".
    pub fn repository(&self) -> String {
        format!("{}/{}", self.github_owner, self.github_repo)
    }
}
