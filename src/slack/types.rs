use serde::{Deserialize, Serialize};

/// Form body Slack sends for a slash command. Only `text`, `response_url`
/// and `channel_id` are read.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SlackCommand {
    pub token: Option<String>,
    pub team_id: Option<String>,
    pub team_domain: Option<String>,
    pub enterprise_id: Option<String>,
    pub enterprise_name: Option<String>,
    pub channel_id: Option<String>,
    pub channel_name: Option<String>,
    pub user_id: Option<String>,
    pub command: Option<String>,
    pub text: Option<String>,
    pub response_url: Option<String>,
    pub trigger_id: Option<String>,
    pub api_app_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SlackImageBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub image_url: String,
    pub alt_text: String,
}

/// Message posted back to a slash command's `response_url`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SlackResponse {
    pub response_type: String,
    pub channel: String,
    pub text: String,
    pub blocks: Vec<SlackImageBlock>,
}

impl SlackResponse {
    pub fn title_card(image_url: &str, channel: &str) -> Self {
        SlackResponse {
            response_type: "in_channel".to_string(),
            channel: channel.to_string(),
            text: "Your episode card".to_string(),
            blocks: vec![SlackImageBlock {
                block_type: "image".to_string(),
                image_url: image_url.to_string(),
                alt_text: "sunny card".to_string(),
            }],
        }
    }
}

/// Reply only the invoking user sees.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct EphemeralMessage {
    pub response_type: String,
    pub text: String,
}

impl EphemeralMessage {
    pub fn new(text: impl Into<String>) -> Self {
        EphemeralMessage { response_type: "ephemeral".to_string(), text: text.into() }
    }
}
