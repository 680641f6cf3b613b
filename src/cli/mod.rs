pub mod once;
pub mod run;

use crate::config::{Config, DEFAULT_POLL_INTERVAL};
use clap::{Parser, Subcommand};
use tracing::error;

#[derive(Parser)]
#[command(name = "homewatch")]
#[command(
    author,
    version,
    about = "Homework review status notifier for Practicum and Telegram"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll the review API forever and relay status changes to Telegram
    Run(RunArgs),

    /// Execute a single poll cycle and exit; cycle errors set the exit code
    Once(OnceArgs),
}

#[derive(Parser, Clone)]
pub struct RunArgs {
    /// Seconds to sleep between poll cycles
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_secs())]
    pub interval: u64,

    /// Unix timestamp to query from (default: now)
    #[arg(long)]
    pub from_date: Option<i64>,
}

#[derive(Parser, Clone)]
pub struct OnceArgs {
    /// Unix timestamp to query from (default: now)
    #[arg(long)]
    pub from_date: Option<i64>,
}

/// Startup config gate: missing credentials are fatal before any loop entry.
pub(crate) fn load_config() -> anyhow::Result<Config> {
    Config::from_env().map_err(|err| {
        error!("{err}");
        anyhow::Error::new(err)
    })
}

pub(crate) fn resolve_from_date(from_date: Option<i64>) -> i64 {
    from_date.unwrap_or_else(|| chrono::Utc::now().timestamp())
}
