use super::ReviewApi;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 60;

pub struct HttpReviewClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpReviewClient {
    pub fn new(endpoint: &str, token: &str) -> Result<Self, FetchError> {
        // The original service call had no timeout at all; a hanging endpoint
        // would stall the loop forever. Bound both phases instead.
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("homewatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        })
    }
}

#[async_trait]
impl ReviewApi for HttpReviewClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
