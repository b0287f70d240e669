//! HTTP request handlers for all puml-ld endpoints.
//!
//! Handlers are async functions that receive Axum extractors and return
//! `Result<impl IntoResponse, AppError>`. Conversion itself is synchronous
//! and runs inline; the only I/O is shape lookup.

pub mod convert;
pub mod service;
pub mod shapes;

use std::sync::Arc;

use crate::{config::ServerConfig, shapes::ShapeRepository};

/// Shared application state threaded through all Axum handlers via [`axum::extract::State`].
#[derive(Clone)]
pub struct AppState {
    pub shapes: Arc<dyn ShapeRepository>,
    pub config: ServerConfig,
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::{body::Body, http::Response, Router};
    use http_body_util::BodyExt;

    use crate::{config::ServerConfig, router::build_router, shapes::ShapeRepository};

    pub fn build_app(shapes: Arc<dyn ShapeRepository>) -> Router {
        let config = ServerConfig {
            bind_addr: "127.0.0.1:4567".parse().unwrap(),
            shapes_dir: "shapes".into(),
            name: "puml-ld-test".into(),
        };
        build_router(shapes, config)
    }

    pub async fn body_bytes(resp: Response<Body>) -> bytes::Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
        serde_json::from_slice(&body_bytes(resp).await).unwrap()
    }
}
