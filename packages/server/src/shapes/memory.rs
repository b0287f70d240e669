//! In-memory shape repository.
//!
//! Shapes are held in a [`BTreeMap`] keyed by lowercase diagram type, so
//! listing comes out sorted without extra work.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{display_name, shape_key, ShapeError, ShapeRepository};

/// Thread-safe, in-memory implementation of [`ShapeRepository`].
pub struct MemoryShapes {
    inner: RwLock<BTreeMap<String, String>>,
}

impl MemoryShapes {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    /// Store `turtle` as the shape for `diagram_type`, replacing any previous
    /// shape. Names outside `[A-Za-z0-9_]` are ignored.
    pub fn insert(&self, diagram_type: &str, turtle: impl Into<String>) {
        let Some(key) = shape_key(diagram_type) else {
            tracing::warn!(diagram_type, "ignoring shape with invalid name");
            return;
        };
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, turtle.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_shape(self, diagram_type: &str, turtle: impl Into<String>) -> Self {
        self.insert(diagram_type, turtle);
        self
    }
}

impl Default for MemoryShapes {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShapeRepository for MemoryShapes {
    async fn get_shape(&self, diagram_type: &str) -> Result<String, ShapeError> {
        let not_found = || ShapeError::NotFound(diagram_type.to_string());
        let key = shape_key(diagram_type).ok_or_else(not_found)?;
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.get(&key).cloned().ok_or_else(not_found)
    }

    async fn list_shapes(&self) -> Result<Vec<String>, ShapeError> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Ok(inner.keys().map(|k| display_name(k)).collect())
    }
}
