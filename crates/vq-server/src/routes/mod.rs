//! HTTP route handlers for the site server.
//!
//! Each submodule provides a `router()` function that returns an Axum
//! `Router` fragment. [`build_router`] assembles them with the shared
//! middleware stack.

pub mod newsletter;
pub mod pages;
pub mod snapshot;
pub mod sys;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Upper bound on in-flight API requests.
const API_CONCURRENCY_LIMIT: usize = 256;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    // API responses carry per-session state and must not be cached.
    let api = Router::new()
        .nest("/v1/snapshot", snapshot::router())
        .nest("/v1/newsletter", newsletter::router())
        .nest("/v1/sys", sys::router())
        .layer(tower::limit::ConcurrencyLimitLayer::new(
            API_CONCURRENCY_LIMIT,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(api)
        .merge(pages::router())
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}
