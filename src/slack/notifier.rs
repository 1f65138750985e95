//! Posts rendered card links back to a slash command's response URL.
use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, AppResult};
use crate::slack::types::SlackResponse;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, callback_url: &str, image_url: &str, channel: &str) -> AppResult<()>;
}

#[derive(Clone, Default)]
pub struct SlackNotifier {
    client: Client,
}

impl SlackNotifier {
    pub fn new(client: Client) -> Self {
        SlackNotifier { client }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    /// Single POST, no retry. A non-2xx reply is logged but not an error.
    async fn notify(&self, callback_url: &str, image_url: &str, channel: &str) -> AppResult<()> {
        let payload = SlackResponse::title_card(image_url, channel);
        tracing::info!("Posting title card {} to channel {}", image_url, channel);

        let response = self
            .client
            .post(callback_url)
            .json(&payload)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response body".to_string());
        if status.is_success() {
            tracing::info!("Slack responded {}: {}", status, body);
        } else {
            tracing::warn!("Slack responded {}: {}", status, body);
        }
        Ok(())
    }
}
