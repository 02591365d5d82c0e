//! Artifact materialization.

use std::path::Path;

use anyhow::{Context, Result};

/// Where generated artifacts land. The assembler computes paths and text;
/// the writer owns the side effect, which keeps generation testable without
/// touching the real filesystem.
pub trait ArtifactWriter {
    fn write_artifact(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Writes artifacts to disk, creating parent directories as needed.
#[derive(Debug, Default)]
pub struct FileSystemWriter;

impl ArtifactWriter for FileSystemWriter {
    fn write_artifact(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        std::fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display()))
    }
}
