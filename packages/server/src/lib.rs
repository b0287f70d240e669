//! Public surface for the `puml-ld-server` crate.
//!
//! Exposes the router builder, config, and shape repositories so that
//! external crates (e.g. the conformance test suite) can spin up an
//! in-process server without spawning a subprocess.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod shapes;

pub use config::ServerConfig;
pub use router::build_router;
pub use shapes::{fs::FsShapes, memory::MemoryShapes, ShapeError, ShapeRepository};
