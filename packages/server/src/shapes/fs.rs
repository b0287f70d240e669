//! Filesystem shape repository.
//!
//! Each shape is a file named `<lowercase type>_shape.ttl` in one directory.
//! Files are read on every request, so shapes can be edited without a
//! restart.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{display_name, shape_key, ShapeError, ShapeRepository, SHAPE_SUFFIX};

/// [`ShapeRepository`] backed by a directory of Turtle files.
pub struct FsShapes {
    dir: PathBuf,
}

impl FsShapes {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ShapeRepository for FsShapes {
    async fn get_shape(&self, diagram_type: &str) -> Result<String, ShapeError> {
        let not_found = || ShapeError::NotFound(diagram_type.to_string());
        let key = shape_key(diagram_type).ok_or_else(not_found)?;
        let path = self.dir.join(format!("{key}{SHAPE_SUFFIX}"));

        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(not_found()),
            Err(e) => Err(ShapeError::Io(format!("{}: {e}", path.display()))),
        }
    }

    async fn list_shapes(&self) -> Result<Vec<String>, ShapeError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ShapeError::Io(format!("{}: {e}", self.dir.display()))),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ShapeError::Io(e.to_string()))?
        {
            let file_name = entry.file_name();
            if let Some(stem) = file_name.to_str().and_then(|n| n.strip_suffix(SHAPE_SUFFIX)) {
                names.push(display_name(stem));
            }
        }
        names.sort();
        Ok(names)
    }
}
