//! Shape repository abstraction.
//!
//! A shape is pre-authored SHACL (Turtle) text for one diagram type. The
//! [`ShapeRepository`] trait is the contract between the `/shacl` handler and
//! wherever shapes live. Lookups are case-insensitive on the diagram type.
//!
//! # Implementations
//!
//! | Type | When to use |
//! |------|-------------|
//! | [`FsShapes`] | Production; one `<type>_shape.ttl` file per diagram type |
//! | [`MemoryShapes`] | Tests and the conformance suite |
//!
//! [`FsShapes`]: fs::FsShapes
//! [`MemoryShapes`]: memory::MemoryShapes

pub mod fs;
pub mod memory;

use async_trait::async_trait;

/// File name suffix shared by every shape file.
pub const SHAPE_SUFFIX: &str = "_shape.ttl";

/// Errors that shape lookups can return.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// No shape exists for the requested diagram type.
    #[error("no shape for diagram type: {0}")]
    NotFound(String),

    /// The backing store could not be read.
    #[error("shape store error: {0}")]
    Io(String),
}

#[async_trait]
pub trait ShapeRepository: Send + Sync {
    /// Fetch the Turtle text of the shape for `diagram_type`.
    ///
    /// Returns [`ShapeError::NotFound`] when no shape exists, including when
    /// `diagram_type` contains characters outside `[A-Za-z0-9_]`.
    async fn get_shape(&self, diagram_type: &str) -> Result<String, ShapeError>;

    /// Names of all available shapes, capitalized and sorted.
    async fn list_shapes(&self) -> Result<Vec<String>, ShapeError>;
}

/// The lowercase lookup key for `diagram_type`, or `None` if the name could
/// escape the shapes directory or is empty.
pub(crate) fn shape_key(diagram_type: &str) -> Option<String> {
    let valid = !diagram_type.is_empty()
        && diagram_type
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then(|| diagram_type.to_ascii_lowercase())
}

/// Display name for a stored key: first letter upper-case, the rest lower.
pub(crate) fn display_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
