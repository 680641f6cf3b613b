use crate::api::HttpReviewClient;
use crate::cli::{load_config, resolve_from_date, OnceArgs};
use crate::config::{DEFAULT_POLL_INTERVAL, REVIEW_ENDPOINT};
use crate::notify::TelegramClient;
use crate::watcher::Watcher;

/// Single poll cycle, for cron-style use and smoke testing. Unlike the
/// endless loop, cycle errors propagate here so the exit code reflects them.
pub async fn execute(args: OnceArgs) -> anyhow::Result<()> {
    let config = load_config()?;

    let api = HttpReviewClient::new(REVIEW_ENDPOINT, &config.practicum_token)?;
    let messenger = TelegramClient::new(&config.telegram_token, &config.telegram_chat_id)?;

    let mut watcher = Watcher::new(
        api,
        messenger,
        DEFAULT_POLL_INTERVAL,
        resolve_from_date(args.from_date),
    );

    watcher.poll_once().await?;
    tracing::debug!("Cycle complete, cursor at {}", watcher.cursor());
    Ok(())
}
