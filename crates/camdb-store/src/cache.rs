//! Time-boxed cache in front of a [`CameraLoader`].
//!
//! A successful load is reused until `cache_expiration` has elapsed. Failed
//! loads never touch the cached entry and are never masked by it: the caller
//! always sees the error.

use std::sync::Arc;
use std::time::Duration;

use camdb_core::AppConfig;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::StoreError;
use crate::source::{CameraList, CameraLoader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    pub enable_caching: bool,
    pub cache_expiration: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enable_caching: true,
            cache_expiration: Duration::from_secs(30 * 60),
        }
    }
}

impl CacheSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            enable_caching: config.enable_caching,
            cache_expiration: config.cache_expiration,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enable_caching: false,
            ..Self::default()
        }
    }
}

#[derive(Debug)]
struct CacheEntry {
    cameras: CameraList,
    loaded_at: Instant,
}

/// Wraps a loader with a single cached camera list.
///
/// The entry is guarded by an async mutex held across the reload, so
/// concurrent callers hitting an expired cache share one load.
#[derive(Debug)]
pub struct CachedStore<L> {
    loader: L,
    settings: CacheSettings,
    entry: Mutex<Option<CacheEntry>>,
}

impl<L: CameraLoader> CachedStore<L> {
    pub fn new(loader: L, settings: CacheSettings) -> Self {
        Self {
            loader,
            settings,
            entry: Mutex::new(None),
        }
    }

    /// Returns the cached list while fresh, otherwise reloads.
    ///
    /// # Errors
    ///
    /// Propagates any [`StoreError`] from the wrapped loader unchanged.
    pub async fn get_all(&self) -> Result<CameraList, StoreError> {
        let mut entry = self.entry.lock().await;

        if let Some(cached) = entry.as_ref().filter(|e| self.is_fresh(e)) {
            tracing::debug!(count = cached.cameras.len(), "returning cached cameras");
            return Ok(Arc::clone(&cached.cameras));
        }

        let cameras = self.loader.load_all().await?;

        if self.settings.enable_caching {
            *entry = Some(CacheEntry {
                cameras: Arc::clone(&cameras),
                loaded_at: Instant::now(),
            });
            tracing::info!(count = cameras.len(), "cached cameras");
        }

        Ok(cameras)
    }

    /// Drops the cached list; the next call reloads.
    pub async fn invalidate(&self) {
        self.entry.lock().await.take();
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        self.settings.enable_caching && entry.loaded_at.elapsed() < self.settings.cache_expiration
    }
}

impl<L: CameraLoader> CameraLoader for CachedStore<L> {
    async fn load_all(&self) -> Result<CameraList, StoreError> {
        self.get_all().await
    }
}
