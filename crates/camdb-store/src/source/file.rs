use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::parser::parse_document;

use super::{CameraList, CameraLoader};

/// Reads cameras from a delimited-text file on the local filesystem.
///
/// The file is re-read on every call; put a [`crate::CachedStore`] in front
/// to avoid repeated parsing.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_and_parse(&self, shown: &str) -> Result<CameraList, StoreError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotFound {
                    source_name: shown.to_string(),
                }
            } else {
                StoreError::Io {
                    path: shown.to_string(),
                    source: e,
                }
            }
        })?;

        let cameras = parse_document(bytes.as_slice(), shown)?;
        Ok(cameras.into())
    }
}

impl CameraLoader for FileSource {
    async fn load_all(&self) -> Result<CameraList, StoreError> {
        let shown = self.path.display().to_string();
        tracing::info!(path = %shown, "loading cameras from file");

        match self.read_and_parse(&shown).await {
            Ok(cameras) => {
                tracing::info!(path = %shown, count = cameras.len(), "loaded cameras from file");
                Ok(cameras)
            }
            Err(e) => {
                tracing::error!(path = %shown, error = %e, "failed to load cameras from file");
                Err(e)
            }
        }
    }
}
