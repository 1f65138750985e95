use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use title_card_bot::error::{AppError, AppResult};

use title_card_bot::{
    api,
    bootstrap,
    config,
    render::CardRenderer,
    slack::{SlackNotifier, SlackOAuth},
    storage::S3Store,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    config::Config::dotenv_load();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = config::Config::new()?;
    config::Config::print_env_vars();
    if config.slack_signing_secret.is_some() {
        tracing::warn!("SLACK_SIGNING_SECRET is set but request signatures are not verified");
    }

    let renderer = CardRenderer::from_file(&config.font_path)?;

    // The store must be reachable before serving
    let store = Arc::new(S3Store::from_config(&config));
    bootstrap::ensure_bucket(store.as_ref(), &config.storage_bucket).await?;

    let http = reqwest::Client::new();
    let state = Arc::new(api::AppState {
        renderer,
        store,
        notifier: Arc::new(SlackNotifier::new(http.clone())),
        oauth: SlackOAuth::from_config(http, &config),
        storage_url: config.storage_url.clone(),
        bucket: config.storage_bucket.clone(),
    });

    let app = api::router(state, &config.static_dir);

    // Run our application with safe parsing
    let ip: std::net::IpAddr = config.api_host.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 127.0.0.1", config.api_host);
        std::net::IpAddr::from([127, 0, 0, 1])
    });
    let port: u16 = config.api_port.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_PORT '{}', falling back to 8080", config.api_port);
        8080
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await
        .map_err(|e| AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))
}
