use clap::Parser;
use clickup_to_github::cli::{Cli, Commands};

#[test]
fn test_start_subcommand_parses() {
    let cli = Cli::try_parse_from(["clickup-to-github", "start"]).unwrap();
    assert_eq!(cli.command, Commands::Start);
}

#[test]
fn test_subcommand_is_required() {
    assert!(Cli::try_parse_from(["clickup-to-github"]).is_err());
}

#[test]
fn test_start_takes_no_flags() {
    assert!(Cli::try_parse_from(["clickup-to-github", "start", "--token", "x"]).is_err());
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["clickup-to-github", "delete"]).is_err());
}
