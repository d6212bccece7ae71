// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{
    health_handler, index_handler, languages_handler, metrics_handler, translate_handler,
};
use super::middleware::{request_id_layers, track_requests};
use crate::config::AppConfig;
use crate::translation::Translator;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Request bodies above this fail as `text_too_long` before deserialization.
/// 30,000 chars of 4-byte UTF-8 plus JSON framing fits comfortably.
const MAX_BODY_BYTES: usize = 256 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub translator: Translator,
}

pub fn create_router(config: AppConfig, translator: Translator) -> Router {
    let state = AppState {
        config: Arc::new(config),
        translator,
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/api/languages", get(languages_handler))
        .route("/api/translate", post(translate_handler))
        .route_layer(axum::middleware::from_fn(track_requests))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}
