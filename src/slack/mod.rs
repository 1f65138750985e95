//! Slack integration: slash-command payloads, the response-URL notifier and
//! the OAuth install exchange.
pub mod notifier;
pub mod oauth;
pub mod types;

pub use notifier::{Notifier, SlackNotifier};
pub use oauth::SlackOAuth;
pub use types::{EphemeralMessage, SlackCommand, SlackResponse};
