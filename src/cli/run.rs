use crate::api::HttpReviewClient;
use crate::cli::{load_config, resolve_from_date, RunArgs};
use crate::config::REVIEW_ENDPOINT;
use crate::notify::TelegramClient;
use crate::watcher::Watcher;
use std::time::Duration;

pub async fn execute(args: RunArgs) -> anyhow::Result<()> {
    let config = load_config()?;

    let api = HttpReviewClient::new(REVIEW_ENDPOINT, &config.practicum_token)?;
    let messenger = TelegramClient::new(&config.telegram_token, &config.telegram_chat_id)?;

    let mut watcher = Watcher::new(
        api,
        messenger,
        Duration::from_secs(args.interval),
        resolve_from_date(args.from_date),
    );

    watcher.run().await;
    Ok(())
}
