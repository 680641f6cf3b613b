mod http;

pub use http::HttpReviewClient;

use crate::error::FetchError;
use async_trait::async_trait;
use serde_json::Value;

/// Port to the remote review-status service. The watcher only ever sees this
/// trait, so tests can drive full cycles against a scripted double.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// Fetch review updates since `from_date` (Unix seconds). Returns the
    /// raw JSON body; shape validation happens in the payload layer.
    async fn fetch(&self, from_date: i64) -> Result<Value, FetchError>;
}
