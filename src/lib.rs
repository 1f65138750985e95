//! Title card bot library
//!
//! Modules:
//! - `api`: Axum HTTP handlers, shared state and router setup.
//! - `render`: Draws centered, word-wrapped text onto a fixed PNG card.
//! - `storage`: Object store seam and the S3-compatible client.
//! - `slack`: Slash-command payloads, response-URL notifier, OAuth exchange.
//! - `bootstrap`: Startup bucket check.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `CardRenderer`,
//! `S3Store`, and `SlackNotifier`.
pub mod api;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod render;
pub mod slack;
pub mod storage;

pub use config::Config;
pub use render::CardRenderer;
pub use slack::SlackNotifier;
pub use storage::S3Store;
