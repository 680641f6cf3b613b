use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod api;
mod cli;
mod config;
mod error;
mod notify;
mod payload;
mod watcher;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - debug detail only with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("homewatch=debug")
    } else {
        EnvFilter::new("homewatch=info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Run(args) => cli::run::execute(args).await,
        Commands::Once(args) => cli::once::execute(args).await,
    }
}
