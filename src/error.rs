use thiserror::Error;

/// Everything that can fail inside one poll cycle. Caught exactly once, at
/// the loop-body boundary in the watcher; nothing below that boundary
/// handles these.
#[derive(Error, Debug)]
pub enum CycleError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Payload error: {0}")]
    Payload(#[from] PayloadError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    Missing(&'static str),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to review API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Review API returned HTTP {status} instead of 200")]
    UnexpectedStatus { status: u16 },
}

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Malformed review API response: {0}")]
    Shape(String),

    #[error("Key '{0}' missing from review API response")]
    MissingKey(&'static str),

    #[error("Unknown homework status '{0}' in review API response")]
    UnknownVerdict(String),
}

/// Delivery failures are a separate kind on purpose: the watcher logs them
/// and never folds them into [`CycleError`], so a broken messenger cannot
/// trigger notifications about its own breakage.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Request to Telegram failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Telegram rejected the message (code {code}): {description}")]
    Api { code: i64, description: String },
}
