//! Per-request staging directory.
//!
//! Each request gets a fresh subdirectory under the configured download
//! root, so concurrent requests never share disk state. Cleanup removes
//! the whole subdirectory; a cleanup failure is logged and swallowed.

use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// A uniquely named directory owned by exactly one request.
#[derive(Debug)]
pub struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    /// Create `root/<uuid>`, creating `root` itself if needed.
    pub fn create(root: &Path) -> io::Result<Self> {
        let dir = root.join(Uuid::new_v4().to_string());
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Remove the directory and everything under it. Never fails the
    /// request: errors are logged and dropped.
    pub fn cleanup(&self) {
        if let Err(err) = std::fs::remove_dir_all(&self.dir) {
            tracing::warn!("Cleanup failed for {}: {}", self.dir.display(), err);
        }
    }
}
