use crate::api::ReviewApi;
use crate::error::CycleError;
use crate::notify::Messenger;
use crate::payload::{parse_status, validate};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// The poll-loop controller. Owns the timestamp cursor and the last failure
/// summary; both live only as long as the process.
pub struct Watcher<A, M> {
    api: A,
    messenger: M,
    interval: Duration,
    cursor: i64,
    last_failure: Option<String>,
}

impl<A: ReviewApi, M: Messenger> Watcher<A, M> {
    pub fn new(api: A, messenger: M, interval: Duration, from_date: i64) -> Self {
        Self {
            api,
            messenger,
            interval,
            cursor: from_date,
            last_failure: None,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// One poll pass: fetch, validate, act on the first homework if there is
    /// one, then advance the cursor. Errors propagate untouched and leave
    /// the cursor where it was, so the next pass re-queries the same window.
    pub async fn poll_once(&mut self) -> Result<(), CycleError> {
        let body = self.api.fetch(self.cursor).await?;
        let response = validate(&body)?;

        match response.homeworks.first() {
            None => info!("Review status unchanged"),
            Some(item) => {
                let message = parse_status(item)?;
                self.deliver(&message).await;
            }
        }

        self.cursor = response.current_date;
        Ok(())
    }

    /// One full cycle: a poll pass plus the loop-boundary error handling.
    /// This is the only place cycle errors are caught.
    pub async fn cycle(&mut self) {
        let Err(err) = self.poll_once().await else {
            return;
        };

        match &err {
            CycleError::Fetch(cause) => error!("Poll cycle failed: {cause}"),
            CycleError::Payload(cause) => error!("Poll cycle failed: {cause}"),
        }

        // Best-effort outward report, suppressed while the same failure
        // repeats across consecutive cycles. Delivery failures stay out of
        // this path entirely: deliver() never raises.
        let summary = format!("Program failure: {err}");
        if self.last_failure.as_deref() == Some(summary.as_str()) {
            debug!("Suppressing repeated failure notification");
        } else {
            self.deliver(&summary).await;
            self.last_failure = Some(summary);
        }
    }

    /// Run cycles until the operator interrupts. The sleep runs after every
    /// cycle, success or failure.
    pub async fn run(&mut self) {
        info!(
            "Watching for review updates every {}s from timestamp {}",
            self.interval.as_secs(),
            self.cursor
        );

        loop {
            let interrupted = tokio::select! {
                _ = tokio::signal::ctrl_c() => true,
                _ = async {
                    self.cycle().await;
                    sleep(self.interval).await;
                } => false,
            };

            if interrupted {
                debug!("Shutdown requested, stopping watcher");
                return;
            }
        }
    }

    async fn deliver(&self, text: &str) {
        match self.messenger.send(text).await {
            Ok(()) => debug!("Notification delivered"),
            Err(err) => error!("Failed to deliver notification: {err}"),
        }
    }
}
