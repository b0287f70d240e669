//! Shared helpers for the puml-ld conformance test suite.
//!
//! Provides [`spawn_server`], which binds a `TcpListener` on an ephemeral
//! port, wires up an in-process server backed by `MemoryShapes`, and returns
//! both the local URL and the shape repository so tests can seed shapes
//! without going through the filesystem.

use std::path::PathBuf;
use std::sync::Arc;

use puml_ld_server::{build_router, FsShapes, MemoryShapes, ServerConfig, ShapeRepository};

/// Start an ephemeral in-process server and return `(base_url, shapes)`.
///
/// # Panics
///
/// Panics if the TCP listener cannot be bound or the server fails to start.
pub async fn spawn_server() -> (String, Arc<MemoryShapes>) {
    let shapes = Arc::new(MemoryShapes::new());
    let base_url = spawn_server_with(Arc::clone(&shapes) as Arc<dyn ShapeRepository>).await;
    (base_url, shapes)
}

/// Start an ephemeral server that reads the shape files shipped in the
/// workspace `shapes/` directory.
pub async fn spawn_server_with_shipped_shapes() -> String {
    spawn_server_with(Arc::new(FsShapes::new(shipped_shapes_dir()))).await
}

/// The workspace `shapes/` directory.
pub fn shipped_shapes_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../shapes")
}

async fn spawn_server_with(shapes: Arc<dyn ShapeRepository>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");

    let config = ServerConfig {
        bind_addr: addr,
        shapes_dir: shipped_shapes_dir(),
        name: "puml-ld".into(),
    };
    let router = build_router(shapes, config);

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("conformance server error");
    });

    format!("http://{addr}")
}
