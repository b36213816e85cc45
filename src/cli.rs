use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "clickup-to-github",
    version,
    about = "A CLI tool to create GitHub issues from ClickUp tasks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the ClickUp to GitHub sync tool
    Start,
}
