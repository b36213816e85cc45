use serial_test::serial;
use std::env;

use clickup_to_github::config::{CredentialField, PartialCredentials};

fn save_env() -> Vec<(&'static str, Option<String>)> {
    CredentialField::ALL
        .iter()
        .map(|f| (f.env_var(), env::var(f.env_var()).ok()))
        .collect()
}

fn restore_env(saved: Vec<(&'static str, Option<String>)>) {
    for (name, value) in saved {
        unsafe {
            match value {
                Some(v) => env::set_var(name, v),
                None => env::remove_var(name),
            }
        }
    }
}

#[test]
#[serial]
fn test_partial_credentials_from_env() {
    let saved = save_env();
    unsafe {
        env::set_var("CLICKUP_TOKEN", "pk_env");
        env::set_var("CLICKUP_LIST_ID", " 901234 ");
        env::set_var("GITHUB_TOKEN", "");
        env::remove_var("GITHUB_OWNER");
        env::set_var("GITHUB_REPO", "backlog");
    }

    let partial = PartialCredentials::from_env();
    restore_env(saved);

    assert_eq!(partial.clickup_token.as_deref(), Some("pk_env"));
    assert_eq!(partial.clickup_list_id.as_deref(), Some("901234"));
    assert_eq!(partial.github_token, None);
    assert_eq!(partial.github_owner, None);
    assert_eq!(partial.github_repo.as_deref(), Some("backlog"));
}

#[test]
#[serial]
fn test_env_with_every_value_completes() {
    let saved = save_env();
    unsafe {
        env::set_var("CLICKUP_TOKEN", "pk");
        env::set_var("CLICKUP_LIST_ID", "1");
        env::set_var("GITHUB_TOKEN", "ghp");
        env::set_var("GITHUB_OWNER", "acme");
        env::set_var("GITHUB_REPO", "backlog");
    }

    let creds = PartialCredentials::from_env().complete();
    restore_env(saved);

    let creds = creds.expect("all values present");
    assert_eq!(creds.repository(), "acme/backlog");
    assert_eq!(creds.github_token, "ghp");
}

#[test]
#[serial]
fn test_config_load_via_config_path_feeds_defaults() {
    use clickup_to_github::config::Config;
    use std::fs;
    use tempfile::TempDir;

    let orig = env::var("CONFIG_PATH").ok();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[clickup]\nlist_id = \"901234\"\n\n[github]\nowner = \"acme\"\nrepo = \"backlog\"\n",
    )
    .unwrap();

    unsafe {
        env::set_var("CONFIG_PATH", &config_path);
    }
    let config = Config::load();
    unsafe {
        match orig {
            Some(v) => env::set_var("CONFIG_PATH", v),
            None => env::remove_var("CONFIG_PATH"),
        }
    }

    let defaults = PartialCredentials::from_config(&config.unwrap());
    assert_eq!(defaults.clickup_list_id.as_deref(), Some("901234"));
    assert_eq!(defaults.github_owner.as_deref(), Some("acme"));
    assert_eq!(defaults.github_repo.as_deref(), Some("backlog"));
    assert_eq!(defaults.clickup_token, None);
}
