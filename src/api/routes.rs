//! Shared application state and router construction.
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::render::CardRenderer;
use crate::slack::{Notifier, SlackOAuth};
use crate::storage::ObjectStore;

/// Built once at startup, read-only afterwards.
pub struct AppState {
    pub renderer: CardRenderer,
    pub store: Arc<dyn ObjectStore>,
    pub notifier: Arc<dyn Notifier>,
    pub oauth: SlackOAuth,
    /// Base of the public object URLs, usually the storage endpoint.
    pub storage_url: String,
    pub bucket: String,
}

pub fn router(state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/render", post(handlers::render_card))
        .route("/command", post(handlers::slash_command))
        .route("/authorize", get(handlers::authorize))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
