//! `puml-ld-server`: HTTP service converting PlantUML documents to JSON-LD.
//!
//! # Quick start
//!
//! ```sh
//! # Default port, shapes read from ./shapes:
//! puml-ld-server
//!
//! # Custom bind address and shapes directory:
//! PUML_LD_BIND=127.0.0.1:8080 PUML_LD_SHAPES_DIR=/etc/puml-ld/shapes puml-ld-server
//! ```
//!
//! # Environment variables
//!
//! See [`puml_ld_server::ServerConfig::from_env`] for the full list.

use std::sync::Arc;

use puml_ld_server::{build_router, FsShapes, ServerConfig, ShapeRepository};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "puml_ld_server=info,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env();

    let shapes = FsShapes::new(&config.shapes_dir);
    match shapes.list_shapes().await {
        Ok(names) if names.is_empty() => {
            tracing::warn!("shapes: none found in {}", shapes.dir().display())
        }
        Ok(names) => tracing::info!(
            "shapes: {} from {} ({})",
            names.len(),
            shapes.dir().display(),
            names.join(", ")
        ),
        Err(e) => tracing::warn!("shapes: cannot list {}: {e}", shapes.dir().display()),
    }
    let shapes: Arc<dyn ShapeRepository> = Arc::new(shapes);

    let app = build_router(shapes, config.clone());

    tracing::info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {e}", config.bind_addr));

    axum::serve(listener, app).await.expect("server error");
}
