use std::process::ExitCode;

use clap::Parser;
use clickup_to_github::{app, cli, logging};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Start => ExitCode::from(app::App::start().await),
    }
}
