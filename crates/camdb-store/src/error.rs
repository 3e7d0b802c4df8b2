use thiserror::Error;

/// Errors raised while loading camera data from a source.
///
/// Row-level problems never surface here: malformed rows are logged and
/// skipped by the parser. Everything in this enum aborts the whole load.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configured file or bundled resource does not exist.
    #[error("camera source not found: {source_name}")]
    NotFound { source_name: String },

    /// The source exists but could not be read.
    #[error("failed to read camera source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The delimited-text reader failed before any rows could be read.
    #[error("malformed camera data in {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },
}

impl StoreError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
