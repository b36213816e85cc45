//! Application constants for API endpoints, environment variables, prompts,
//! and the startup banner.

/// REST API endpoint constants.
pub mod api {
    /// Base URL for the ClickUp API v2.
    pub const CLICKUP_API_BASE: &str = "https://api.clickup.com/api/v2";

    /// Base URL for the GitHub REST API.
    pub const GITHUB_API_BASE: &str = "https://api.github.com";

    /// User agent sent with ClickUp requests.
    pub const USER_AGENT: &str = concat!("clickup-to-github/", env!("CARGO_PKG_VERSION"));
}

/// Environment variables that pre-fill the interactive prompts.
pub mod env {
    pub const CLICKUP_TOKEN: &str = "CLICKUP_TOKEN";
    pub const CLICKUP_LIST_ID: &str = "CLICKUP_LIST_ID";
    pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
    pub const GITHUB_OWNER: &str = "GITHUB_OWNER";
    pub const GITHUB_REPO: &str = "GITHUB_REPO";

    /// Explicit path to a `config.toml`.
    pub const CONFIG_PATH: &str = "CONFIG_PATH";
}

/// Directory name used under `~/.config` and `$XDG_CONFIG_HOME`.
pub const APP_DIR_NAME: &str = "clickup-to-github";

/// Title of the command selection menu.
pub const COMMAND_MENU_TITLE: &str = "Select a command to execute:";

/// ASCII banner printed when the session starts.
pub const BANNER: &str = r"
   _____ _ _      _                  _______       _____ _ _   _           _
  / ____| (_)    | |                |__   __|     / ____(_) | | |         | |
 | |    | |_  ___| | ___   _ _ __      | | ___   | |  __ _| |_| |__  _   _| |__
 | |    | | |/ __| |/ / | | | '_ \     | |/ _ \  | | |_ | | __| '_ \| | | | '_ \
 | |____| | | (__|   <| |_| | |_) |    | | (_) | | |__| | | |_| | | | |_| | |_) |
  \_____|_|_|\___|_|\_\\__,_| .__/     |_|\___/   \_____|_|\__|_| |_|\\__,_|_.__/
                            | |
                            |_|
";
