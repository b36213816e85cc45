//! XDG-compliant path resolution for configuration files.
//!
//! This module locates `config.toml` and `.env` following the XDG Base
//! Directory Specification, with the current directory checked first.

use std::env;
use std::path::PathBuf;

use crate::constants;

/// Application config directories, in lookup order:
/// 1. ~/.config/clickup-to-github
/// 2. $XDG_CONFIG_HOME/clickup-to-github (if XDG_CONFIG_HOME is set)
fn app_config_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".config").join(constants::APP_DIR_NAME));
    }

    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME")
        && !xdg_config_home.is_empty()
    {
        let xdg_dir = PathBuf::from(xdg_config_home).join(constants::APP_DIR_NAME);
        if !candidates.contains(&xdg_dir) {
            candidates.push(xdg_dir);
        }
    }

    candidates
}

/// Find the config.toml file.
/// Priority:
/// 1. CONFIG_PATH from environment (if set and the file exists)
/// 2. Current directory/config.toml
/// 3. ~/.config/clickup-to-github/config.toml
/// 4. XDG_CONFIG_HOME/clickup-to-github/config.toml
///
/// Returns `None` when no config file exists; the tool then runs without
/// defaults.
pub fn find_config_file() -> Option<PathBuf> {
    if let Ok(config_path) = env::var(constants::env::CONFIG_PATH) {
        let path = PathBuf::from(&config_path);
        if path.is_file() {
            return Some(path);
        }
        tracing::warn!(%config_path, "CONFIG_PATH does not point to a file, ignoring");
    }

    if let Ok(current_dir) = env::current_dir() {
        let current_dir_config = current_dir.join("config.toml");
        if current_dir_config.is_file() {
            return Some(current_dir_config);
        }
    }

    app_config_dirs()
        .into_iter()
        .map(|dir| dir.join("config.toml"))
        .find(|path| path.is_file())
}

/// Find and load a .env file into the process environment.
/// Priority:
/// 1. Current directory/.env
/// 2. ~/.config/clickup-to-github/.env
/// 3. XDG_CONFIG_HOME/clickup-to-github/.env
///
/// Only the first file found is loaded. Variables already set in the
/// environment are not overridden.
pub fn load_env_file() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env")];
    candidates.extend(app_config_dirs().into_iter().map(|dir| dir.join(".env")));

    let found = candidates.into_iter().find(|path| path.is_file())?;
    match dotenv::from_path(&found) {
        Ok(()) => {
            tracing::debug!(path = %found.display(), "loaded .env file");
            Some(found)
        }
        Err(e) => {
            tracing::warn!(path = %found.display(), error = %e, "failed to load .env file");
            None
        }
    }
}
