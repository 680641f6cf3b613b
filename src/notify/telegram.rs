use super::Messenger;
use crate::error::NotifyError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct TelegramClient {
    client: reqwest::Client,
    send_message_url: String,
    chat_id: String,
}

/// Envelope the Bot API wraps every response in. A 2xx status with
/// `ok: false` is still a delivery failure.
#[derive(Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    pub fn new(token: &str, chat_id: &str) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("homewatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            send_message_url: format!("{TELEGRAM_API_BASE}/bot{token}/sendMessage"),
            chat_id: chat_id.to_string(),
        })
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let reply: ApiReply = self
            .client
            .post(&self.send_message_url)
            .json(&json!({
                "chat_id": self.chat_id,
                "text": text,
            }))
            .send()
            .await?
            .json()
            .await?;

        if !reply.ok {
            return Err(NotifyError::Api {
                code: reply.error_code.unwrap_or(0),
                description: reply
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            });
        }

        Ok(())
    }
}
