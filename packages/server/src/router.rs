//! Assembles the Axum [`Router`] from all handler modules.

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    handlers::{convert, service, shapes, AppState},
    shapes::ShapeRepository,
};

/// Build the complete application router with shared state.
pub fn build_router(shapes: Arc<dyn ShapeRepository>, config: ServerConfig) -> Router {
    let state = AppState { shapes, config };

    Router::new()
        .route("/", get(service::root))
        .route("/health", get(service::health))
        .route("/shacl", get(shapes::get_shape))
        .route("/convert", put(convert::convert))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
