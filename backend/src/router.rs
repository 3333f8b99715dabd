use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;

async fn health_check() -> &'static str {
    "OK"
}

/// Static host for the built site. `/demo.html` and unknown paths get the index page.
pub fn site_router(config: &ServerConfig) -> Router {
    let index = config.index_file();
    tracing::debug!("Serving site from {}", config.site_dir.display());
    let files = ServeDir::new(&config.site_dir).fallback(ServeFile::new(&index));

    Router::new()
        .route("/health", get(health_check))
        .route_service("/demo.html", ServeFile::new(&index))
        .fallback_service(files)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
