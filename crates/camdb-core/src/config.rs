use crate::app_config::{AppConfig, Environment, SourceConfig};
use crate::ConfigError;

/// Resource name of the camera list shipped inside the binaries.
pub const DEFAULT_RESOURCE_NAME: &str = "cameras-defb.csv";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a working
/// development configuration backed by the bundled camera list.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::time::Duration;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("CAMDB_ENV", "development"))?;
    let expose_error_details = lookup("CAMDB_ENV").is_ok() && env.exposes_error_details();

    let bind_addr = or_default("CAMDB_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("CAMDB_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("CAMDB_LOG_LEVEL", "info");

    let source = match lookup("CAMDB_CSV_PATH") {
        Ok(path) if !path.trim().is_empty() => SourceConfig::File(PathBuf::from(path)),
        _ => SourceConfig::Bundled(or_default("CAMDB_RESOURCE_NAME", DEFAULT_RESOURCE_NAME)),
    };

    let enable_caching = parse_bool(&or_default("CAMDB_ENABLE_CACHING", "true"))
        .ok_or_else(|| invalid("CAMDB_ENABLE_CACHING", "expected true or false".to_string()))?;

    let cache_expiration_secs = or_default("CAMDB_CACHE_EXPIRATION_SECS", "1800")
        .parse::<u64>()
        .map_err(|e| invalid("CAMDB_CACHE_EXPIRATION_SECS", e.to_string()))?;

    let cors_origin = or_default("CAMDB_CORS_ORIGIN", "http://localhost:4200");

    Ok(AppConfig {
        env,
        expose_error_details,
        bind_addr,
        log_level,
        source,
        enable_caching,
        cache_expiration: Duration::from_secs(cache_expiration_secs),
        cors_origin,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CAMDB_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
