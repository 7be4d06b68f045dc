use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod github;
mod output;
mod parser;
mod provider;
mod runner;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // stdout carries the report and workflow commands, so logs go to stderr
    let filter = if cli.verbose {
        EnvFilter::new("unimported_report=debug")
    } else {
        EnvFilter::new("unimported_report=info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Run(args) => cli::run::execute(args).await,
        Commands::Report(args) => cli::report::execute(args).await,
        Commands::Schema(args) => cli::schema::execute(args),
    };

    if let Err(e) = result {
        let message = format!("{:#}", e);
        error!("{}", message);
        github::actions::set_failed(&message);
        std::process::exit(1);
    }
}
