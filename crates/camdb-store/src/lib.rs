//! Camera data loading, caching and querying.
//!
//! Control flow for a read: [`CameraService`] → [`CachedStore`] → (on miss)
//! a [`CameraLoader`] such as [`CameraSource`] → [`parser`].

pub mod cache;
pub mod error;
pub mod parser;
pub mod service;
pub mod source;

pub use cache::{CacheSettings, CachedStore};
pub use error::StoreError;
pub use parser::{is_valid_row, parse_document, parse_row};
pub use service::{CameraColumns, CameraService};
pub use source::{
    resource_exists, BundledSource, CameraList, CameraLoader, CameraSource, FileSource,
};

use camdb_core::AppConfig;

/// The service stack every binary runs: a cache in front of the configured source.
pub type AppCameraService = CameraService<CachedStore<CameraSource>>;

/// Builds the service stack from application configuration.
#[must_use]
pub fn camera_service_from_config(config: &AppConfig) -> AppCameraService {
    let source = CameraSource::from_config(&config.source);
    tracing::info!(
        %source,
        enable_caching = config.enable_caching,
        cache_expiration_secs = config.cache_expiration.as_secs(),
        "camera source configured"
    );
    CameraService::new(CachedStore::new(
        source,
        CacheSettings::from_app_config(config),
    ))
}
