//! # ClickUp to GitHub
//!
//! A command-line tool that turns the tasks of a ClickUp list into GitHub
//! issues through an interactive session.
//!
//! ## Modules
//!
//! - [`app`] - Session orchestration and the sync loop
//! - [`app_deps`] - Trait seams for the prompt and both API clients
//! - [`clickup`] - ClickUp API client
//! - [`github`] - GitHub API client for issues
//! - [`prompt`] - Credential prompts and the command menu
//! - [`config`] - Config file parsing and pre-filled credentials
//! - [`paths`] - XDG-compliant path resolution
//! - [`validation`] - Input validation utilities
//! - [`error`] - Error formatting utilities
//! - [`errors`] - Structured error types
//! - [`constants`] - Application constants
//! - [`logging`] - Diagnostic logging setup

pub mod app;
pub mod app_deps;
pub mod cli;
pub mod clickup;
pub mod config;
pub mod constants;
pub mod error;
pub mod errors;
pub mod github;
pub mod logging;
pub mod paths;
pub mod prompt;
pub mod validation;
