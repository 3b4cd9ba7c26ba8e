//! Router configuration for the HTTP API.
//!
//! No routing is performed: every method and path falls through to the
//! calculator handler. Middleware adds request tracing and the fixed
//! `Server` header.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::warn;

use super::handlers;
use crate::config::{ServerConfig, DEFAULT_SERVER_NAME};

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the application router with the calculator handler and middleware.
pub fn create_router(config: &ServerConfig) -> Router {
    Router::new()
        .fallback(handlers::evaluate)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::SERVER,
            server_header(&config.server_name),
        ))
}

fn server_header(name: &str) -> HeaderValue {
    HeaderValue::from_str(name).unwrap_or_else(|_| {
        warn!(server_name = name, "invalid Server header value, using default");
        HeaderValue::from_static(DEFAULT_SERVER_NAME)
    })
}
