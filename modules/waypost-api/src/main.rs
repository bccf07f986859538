use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hackernews_client::HackerNewsClient;
use searxng_client::SearxngClient;
use waypost_common::Config;
use waypost_discover::Aggregator;

mod rest;

pub struct AppState {
    pub aggregator: Aggregator,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("waypost=info".parse()?))
        .init();

    let config = Config::from_env();

    let aggregator = Aggregator::new(
        Arc::new(SearxngClient::new(&config.searxng_url)),
        Arc::new(HackerNewsClient::new()),
    );

    let state = Arc::new(AppState { aggregator });

    let app = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // REST API
        .route("/api/discover", get(rest::api_discover))
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Feeds are randomized per request; never cache them
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path + status + latency only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.api_host, config.api_port);
    info!("Waypost API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
