use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Result, TeamError};
use crate::ports::OutputWriter;

/// Writes the rendered page to the local filesystem.
pub struct FsOutputWriter;

#[async_trait]
impl OutputWriter for FsOutputWriter {
    async fn ensure_directory(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "ensuring output directory");
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|source| TeamError::CreateDir {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        debug!(path = %path.display(), bytes = contents.len(), "writing output file");
        tokio::fs::write(path, contents)
            .await
            .map_err(|source| TeamError::WriteFile {
                path: path.to_path_buf(),
                source,
            })
    }
}
