mod telegram;

pub use telegram::TelegramClient;

use crate::error::NotifyError;
use async_trait::async_trait;

/// Port to the chat-messaging collaborator. Delivery failures carry their
/// own error kind so the watcher can keep them out of the cycle-error path.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}
