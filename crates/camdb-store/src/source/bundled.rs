use crate::error::StoreError;
use crate::parser::parse_document;

use super::{CameraList, CameraLoader};

/// Assets compiled into the binary, keyed by their path inside the crate.
const BUNDLED_RESOURCES: &[(&str, &str)] = &[(
    "camdb-store/data/cameras-defb.csv",
    include_str!("../../data/cameras-defb.csv"),
)];

/// Whether `resource_name` resolves to a bundled resource.
#[must_use]
pub fn resource_exists(resource_name: &str) -> bool {
    find_resource(resource_name).is_some()
}

/// Lowercases and turns path separators into dots, so `Data/x.csv` and
/// `Data.x.csv` name the same resource.
fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace(['/', '\\'], ".")
}

/// Resolves a logical name by case-insensitive suffix match.
fn find_resource(resource_name: &str) -> Option<(&'static str, &'static str)> {
    let wanted = normalize(resource_name);
    if wanted.is_empty() {
        return None;
    }

    BUNDLED_RESOURCES
        .iter()
        .find(|(name, _)| normalize(name).ends_with(&wanted))
        .copied()
}

/// Reads cameras from a resource shipped inside the binary.
#[derive(Debug, Clone)]
pub struct BundledSource {
    resource_name: String,
}

impl BundledSource {
    pub fn new(resource_name: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
        }
    }

    #[must_use]
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    fn read_and_parse(&self) -> Result<CameraList, StoreError> {
        let (name, content) =
            find_resource(&self.resource_name).ok_or_else(|| StoreError::NotFound {
                source_name: self.resource_name.clone(),
            })?;

        tracing::debug!(resource = name, "opened bundled resource");
        let cameras = parse_document(content.as_bytes(), name)?;
        Ok(cameras.into())
    }
}

impl CameraLoader for BundledSource {
    async fn load_all(&self) -> Result<CameraList, StoreError> {
        tracing::info!(resource = %self.resource_name, "loading cameras from bundled resource");

        match self.read_and_parse() {
            Ok(cameras) => {
                tracing::info!(
                    resource = %self.resource_name,
                    count = cameras.len(),
                    "loaded cameras from bundled resource"
                );
                Ok(cameras)
            }
            Err(e) => {
                tracing::error!(
                    resource = %self.resource_name,
                    error = %e,
                    "failed to load cameras from bundled resource"
                );
                Err(e)
            }
        }
    }
}
