mod app_config;
mod cameras;
mod config;

pub use app_config::{AppConfig, Environment, SourceConfig};
pub use cameras::{CameraColumn, CameraRecord, RawRow};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_RESOURCE_NAME};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
