//! Camera data sources.
//!
//! A source is anything that can produce the full, ordered camera list.
//! [`CameraSource`] is the startup-time choice between a file on disk and a
//! resource compiled into the binary.

mod bundled;
mod file;

use std::future::Future;
use std::sync::Arc;

use camdb_core::{CameraRecord, SourceConfig};

use crate::error::StoreError;

pub use bundled::{resource_exists, BundledSource};
pub use file::FileSource;

/// Shared, immutable camera list. A reload swaps the whole list.
pub type CameraList = Arc<[CameraRecord]>;

/// Capability to produce the full camera list.
pub trait CameraLoader: Send + Sync {
    fn load_all(&self) -> impl Future<Output = Result<CameraList, StoreError>> + Send;
}

#[derive(Debug, Clone)]
pub enum CameraSource {
    File(FileSource),
    Bundled(BundledSource),
}

impl CameraSource {
    #[must_use]
    pub fn from_config(config: &SourceConfig) -> Self {
        match config {
            SourceConfig::File(path) => CameraSource::File(FileSource::new(path.clone())),
            SourceConfig::Bundled(name) => CameraSource::Bundled(BundledSource::new(name.clone())),
        }
    }
}

impl std::fmt::Display for CameraSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraSource::File(source) => write!(f, "file:{}", source.path().display()),
            CameraSource::Bundled(source) => write!(f, "bundled:{}", source.resource_name()),
        }
    }
}

impl CameraLoader for CameraSource {
    async fn load_all(&self) -> Result<CameraList, StoreError> {
        match self {
            CameraSource::File(source) => source.load_all().await,
            CameraSource::Bundled(source) => source.load_all().await,
        }
    }
}
