#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let port = config.port;

    match config.api_upstream_url.as_deref() {
        Some(url) => tracing::info!(upstream = url, "api forwarding enabled"),
        None => tracing::warn!("api forwarding disabled; /api/v1 requests will get 503"),
    }
    if config.site.cloudinary_cloud_name.is_none() {
        tracing::warn!("CLOUDINARY_CLOUD_NAME not set; dashboard uploads disabled");
    }
    if config.site.emailjs_public_key.is_none() {
        tracing::warn!("EMAILJS_* not set; contact form sending disabled");
    }

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::leptos_app(state).expect("leptos configuration failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "reelfolio listening");
    axum::serve(listener, app).await.expect("server failed");
}
