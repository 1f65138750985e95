//! OAuth v2 code exchange for app installation.
//!
//! The token endpoint's reply is returned verbatim and only logged by the
//! caller; no token is stored.
use reqwest::Client;

use crate::config::Config;
use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct SlackOAuth {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl SlackOAuth {
    pub fn new(
        client: Client,
        token_url: String,
        client_id: String,
        client_secret: String,
    ) -> Self {
        SlackOAuth { client, token_url, client_id, client_secret }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(
            client,
            config.slack_oauth_url.clone(),
            config.slack_client_id.clone(),
            config.slack_client_secret.clone(),
        )
    }

    /// Exchange an authorization `code` and return the raw response body.
    pub async fn exchange_code(&self, code: &str) -> AppResult<String> {
        let form = [
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];
        let response = self
            .client
            .post(&self.token_url)
            .form(&form)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        response.text().await.map_err(AppError::HttpClient)
    }
}
