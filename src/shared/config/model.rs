use std::env;
use std::time::Duration;

use serde::Deserialize;

use crate::client::ClientError;
use crate::tablet::DEFAULT_MAX_ROWS;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Per-request timeout, covering connect and response.
    pub timeout_ms: u64,
    /// Capacity of tablets built by callers that do not pick their own.
    pub tablet_max_rows: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 18080,
            username: "root".to_string(),
            password: "root".to_string(),
            timeout_ms: 5_000,
            tablet_max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl ClientConfig {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.host.trim().is_empty() {
            return Err(ClientError::InvalidConfig("host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(ClientError::InvalidConfig("port must be non-zero".into()));
        }
        if self.timeout_ms == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout_ms must be greater than zero".into(),
            ));
        }
        if self.tablet_max_rows == 0 {
            return Err(ClientError::InvalidConfig(
                "tablet_max_rows must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub stdout_level: String,
    /// Daily-rolling log files are written here when set.
    pub log_dir: Option<String>,
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stdout_level: "info".to_string(),
            log_dir: None,
            file_level: "debug".to_string(),
        }
    }
}

/// Loads settings from the file named by `IOTDB_REST_CONFIG` (default
/// `config`, any format the `config` crate recognises, optional), then
/// applies `IOTDB_REST__SECTION__KEY` environment overrides.
pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("IOTDB_REST_CONFIG").unwrap_or_else(|_| "config".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path).required(false))
        .add_source(
            config::Environment::with_prefix("IOTDB_REST")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    Ok(settings)
}

/// Loads settings from one TOML file, without environment overrides.
pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::new(path, config::FileFormat::Toml))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
