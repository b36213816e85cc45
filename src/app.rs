//! Session orchestration.
//!
//! [`App::start`] is the single place that decides the process exit code.
//! Everything below it returns typed results; nothing calls
//! `std::process::exit`.

use colored::*;

use crate::app_deps::{
    ClickUpApi, ClickUpApiFactory, GitHubApi, GitHubApiFactory, PromptInterface,
    RealClickUpApiFactory, RealGitHubApiFactory, RealPrompt,
};
use crate::config::{Config, CredentialField, Credentials, PartialCredentials};
use crate::errors::{RunError, SyncError};
use crate::github::{Issue, NewIssue};
use crate::prompt::MenuChoice;
use crate::{constants, error, paths};

/// Issues created by one sync, in creation order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SyncReport {
    pub created: Vec<Issue>,
}

impl SyncReport {
    pub fn count(&self) -> usize {
        self.created.len()
    }
}

/// How an interactive session ended without error.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Synced {
        repository: String,
        report: SyncReport,
    },
    Exited,
}

pub struct App;

impl App {
    /// Run the interactive session and return the process exit code.
    pub async fn start() -> u8 {
        Self::print_banner();
        Self::report(Self::run().await)
    }

    /// Print how the session ended and return the process exit code.
    pub fn report(result: Result<RunOutcome, RunError>) -> u8 {
        match result {
            Ok(outcome) => {
                Self::print_outcome(&outcome);
                0
            }
            Err(e) => {
                match &e {
                    RunError::Sync(sync) => {
                        tracing::error!(error = %sync, "sync aborted");
                        eprintln!("{}", sync.to_string().red());
                    }
                    RunError::Other(other) => {
                        eprintln!("{} {}", "Error:".red(), error::format_error_chain(other));
                    }
                }
                e.exit_code()
            }
        }
    }

    /// Run with the real terminal, ClickUp, and GitHub.
    ///
    /// Loads `.env` and `config.toml` first so their values can skip prompts.
    pub async fn run() -> Result<RunOutcome, RunError> {
        paths::load_env_file();
        let config = Config::load()?;
        let defaults = PartialCredentials::from_env().or(PartialCredentials::from_config(&config));

        Self::run_with_deps(
            &RealPrompt,
            &RealClickUpApiFactory::new(),
            &RealGitHubApiFactory::new(),
            defaults,
        )
        .await
    }

    pub async fn run_with_deps(
        prompt: &dyn PromptInterface,
        clickup_factory: &dyn ClickUpApiFactory,
        github_factory: &dyn GitHubApiFactory,
        defaults: PartialCredentials,
    ) -> Result<RunOutcome, RunError> {
        let credentials = Self::collect_credentials(prompt, defaults)?;

        match prompt.select_command()? {
            MenuChoice::Exit => {
                println!("Exiting the program.");
                Ok(RunOutcome::Exited)
            }
            MenuChoice::Sync => {
                let clickup = clickup_factory
                    .create(credentials.clickup_token.clone())
                    .map_err(SyncError::FetchTasks)?;
                let github = github_factory
                    .create(
                        credentials.github_token.clone(),
                        credentials.github_owner.clone(),
                        credentials.github_repo.clone(),
                    )
                    .map_err(SyncError::CreateIssue)?;

                let report =
                    Self::sync(clickup.as_ref(), github.as_ref(), &credentials.clickup_list_id)
                        .await?;

                Ok(RunOutcome::Synced {
                    repository: credentials.repository(),
                    report,
                })
            }
        }
    }

    /// Collect the five required values, prompting only for those not already
    /// known.
    pub fn collect_credentials(
        prompt: &dyn PromptInterface,
        defaults: PartialCredentials,
    ) -> anyhow::Result<Credentials> {
        let mut values = PartialCredentials::default();

        for field in CredentialField::ALL {
            let value = match defaults.get(field).filter(|v| !v.trim().is_empty()) {
                Some(known) => {
                    Self::print_prefilled(field, known);
                    known.trim().to_string()
                }
                None => prompt.prompt_value(field)?,
            };
            values.set(field, Some(value));
        }

        values
            .complete()
            .ok_or_else(|| anyhow::anyhow!("All five values are required"))
    }

    /// Fetch the list's tasks and create one issue per task, last task first.
    ///
    /// Stops at the first failure. Issues created before it are kept.
    pub async fn sync(
        clickup: &dyn ClickUpApi,
        github: &dyn GitHubApi,
        list_id: &str,
    ) -> Result<SyncReport, SyncError> {
        let mut tasks = clickup
            .fetch_tasks(list_id)
            .await
            .map_err(SyncError::FetchTasks)?;

        if tasks.is_empty() {
            println!("{}", "No tasks found in the ClickUp list.".yellow());
            return Ok(SyncReport::default());
        }

        tasks.reverse();

        let mut report = SyncReport::default();
        for task in &tasks {
            let issue = github
                .create_issue(&NewIssue::from(task))
                .await
                .map_err(SyncError::CreateIssue)?;
            println!("{} {}", "Created GitHub issue:".green(), task.name);
            report.created.push(issue);
        }

        Ok(report)
    }

    /// Fetch every issue of the repository, in any state.
    pub async fn list_issues(github: &dyn GitHubApi) -> Result<Vec<Issue>, SyncError> {
        github.fetch_issues().await.map_err(SyncError::FetchIssues)
    }

    fn print_banner() {
        println!("{}", constants::BANNER.cyan());
    }

    fn print_prefilled(field: CredentialField, value: &str) {
        if field.is_secret() {
            println!("{}", format!("Using {} from environment", field.label()).cyan());
        } else {
            println!(
                "{} {}",
                format!("Using {}:", field.label()).cyan(),
                value.bright_cyan()
            );
        }
    }

    fn print_outcome(outcome: &RunOutcome) {
        if let RunOutcome::Synced { repository, report } = outcome {
            println!(
                "\n{} {}",
                format!("Synced {} task(s) from ClickUp to", report.count()).green(),
                repository.bright_green()
            );
        }
    }
}
