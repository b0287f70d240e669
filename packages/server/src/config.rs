//! Server configuration, populated from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime configuration for the puml-ld service.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `PUML_LD_BIND` | `0.0.0.0:4567` | TCP socket address to listen on |
/// | `PUML_LD_SHAPES_DIR` | `shapes` | Directory holding `<type>_shape.ttl` files |
/// | `PUML_LD_NAME` | `puml-ld` | Service name reported by `GET /` |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,

    /// Directory the filesystem shape repository reads from.
    pub shapes_dir: PathBuf,

    /// Name reported in the service description.
    pub name: String,
}

impl ServerConfig {
    pub const DEFAULT_BIND: &'static str = "0.0.0.0:4567";

    /// Populate config from environment variables, applying defaults where absent.
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = std::env::var("PUML_LD_BIND")
            .unwrap_or_else(|_| Self::DEFAULT_BIND.into())
            .parse()
            .expect("PUML_LD_BIND must be a valid socket address (e.g. 0.0.0.0:4567)");

        Self {
            bind_addr,
            shapes_dir: std::env::var("PUML_LD_SHAPES_DIR")
                .unwrap_or_else(|_| "shapes".into())
                .into(),
            name: std::env::var("PUML_LD_NAME").unwrap_or_else(|_| "puml-ld".into()),
        }
    }
}
