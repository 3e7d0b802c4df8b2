use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Whether error responses may carry internal error details.
    #[must_use]
    pub fn exposes_error_details(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Where camera data is read from, chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// A delimited-text file on the local filesystem.
    File(PathBuf),
    /// An asset compiled into the binary, located by logical resource name.
    Bundled(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Only true when `CAMDB_ENV=development` was set explicitly; the
    /// development default alone never exposes error details.
    pub expose_error_details: bool,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub source: SourceConfig,
    pub enable_caching: bool,
    pub cache_expiration: Duration,
    pub cors_origin: String,
}
