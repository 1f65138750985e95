//! Axum request handlers for the HTTP API.
use axum::extract::{Form, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::api::routes::AppState;
use crate::error::AppError;
use crate::slack::{EphemeralMessage, SlackCommand};
use crate::storage::{public_url, random_key, PNG_CONTENT_TYPE};

pub const MISSING_TEXT: &str = "You must supply text";
pub const UPLOAD_FAILED: &str = "Sorry, failed to generate a title card.";

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub text: String,
    #[serde(default)]
    pub upload: bool,
}

#[derive(Debug, Deserialize)]
pub struct AuthorizeParams {
    pub code: String,
}

pub async fn root() -> Redirect {
    Redirect::to("/index.html")
}

/// Render a card and return the PNG. With `upload`, the card is also stored;
/// the outcome is only logged.
pub async fn render_card(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RenderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let png = state.renderer.render(&request.text)?;

    if request.upload {
        let key = random_key();
        let stored = state
            .store
            .put_object(&state.bucket, &key, png.clone(), PNG_CONTENT_TYPE, true)
            .await;
        match stored {
            Ok(()) => {
                tracing::info!("Uploaded {}", public_url(&state.storage_url, &state.bucket, &key))
            }
            Err(e) => tracing::warn!("Upload of {} failed: {}", key, e),
        }
    }

    Ok(([(header::CONTENT_TYPE, PNG_CONTENT_TYPE)], png))
}

/// Slash command entrypoint. Slack expects a 200 for every outcome, so
/// failures are reported in the body.
pub async fn slash_command(
    State(state): State<Arc<AppState>>,
    Form(command): Form<SlackCommand>,
) -> Response {
    let text = command.text.unwrap_or_default();
    if text.trim().is_empty() {
        return (StatusCode::OK, Json(MISSING_TEXT)).into_response();
    }
    tracing::info!(
        command = ?command.command,
        user = ?command.user_id,
        "Title card requested: {}",
        text
    );

    let failed = || (StatusCode::OK, Json(EphemeralMessage::new(UPLOAD_FAILED))).into_response();

    let png = match state.renderer.render(&text) {
        Ok(png) => png,
        Err(e) => {
            tracing::error!("Failed to render title card: {}", e);
            return failed();
        }
    };

    let key = random_key();
    if let Err(e) = state.store.put_object(&state.bucket, &key, png, PNG_CONTENT_TYPE, true).await {
        tracing::error!("Failed to upload title card: {}", e);
        return failed();
    }
    let image_url = public_url(&state.storage_url, &state.bucket, &key);

    match command.response_url.as_deref().filter(|u| !u.is_empty()) {
        Some(response_url) => {
            let channel = command.channel_id.as_deref().unwrap_or_default();
            if let Err(e) = state.notifier.notify(response_url, &image_url, channel).await {
                tracing::error!("Failed to notify Slack: {}", e);
            }
        }
        None => tracing::warn!("No response_url supplied; {} not posted", image_url),
    }

    StatusCode::OK.into_response()
}

/// OAuth redirect target. The token response is logged, not kept.
pub async fn authorize(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AuthorizeParams>,
) -> StatusCode {
    match state.oauth.exchange_code(&params.code).await {
        Ok(body) => tracing::info!("OAuth exchange response: {}", body),
        Err(e) => tracing::error!("OAuth exchange failed: {}", e),
    }
    StatusCode::OK
}
