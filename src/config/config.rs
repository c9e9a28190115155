use std::path::Path;

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::value::{Dict, Value};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::{LogFormat, LogLevel, LoggingConfig};
use crate::error::StartupError;

/// YAML file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "./config.yaml";

/// Dotenv file read from the working directory.
pub const DOTENV_FILE: &str = ".env";

/// Environment variables read on top of the file layers.
const ENV_KEYS: [&str; 5] = ["host", "port", "debug", "log_level", "log_format"];

/// Runtime settings for the HTTP server.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Forces debug-level logging when set.
    pub debug: bool,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: "0.0.0.0".to_string(),
            port: 5000,
            debug: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Console,
        }
    }
}

impl Settings {
    /// Builds the layered provider: defaults, then the YAML file, then
    /// `.env`, then the environment.
    ///
    /// The default `./config.yaml` is optional; a file named explicitly must exist.
    pub fn figment(config_file: Option<&Path>) -> Result<Figment, StartupError> {
        let file = match config_file {
            Some(path) if !path.is_file() => {
                return Err(StartupError::MissingConfigFile(path.to_path_buf()))
            }
            Some(path) => path,
            None => Path::new(DEFAULT_CONFIG_FILE),
        };

        Ok(Figment::from(Serialized::defaults(Settings::default()))
            .merge(Yaml::file(file))
            .merge(Serialized::defaults(dotenv_layer(Path::new(DOTENV_FILE))?))
            .merge(Env::raw().only(&ENV_KEYS)))
    }

    /// Address the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Logging setup derived from these settings.
    pub fn logging(&self) -> LoggingConfig {
        let level = if self.debug {
            LogLevel::Debug
        } else {
            self.log_level
        };
        LoggingConfig {
            level,
            format: self.log_format,
            service_name: env!("CARGO_PKG_NAME").to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Reads the known keys of a dotenv file without touching the process
/// environment. A missing file yields an empty layer.
fn dotenv_layer(path: &Path) -> Result<Dict, StartupError> {
    let mut layer = Dict::new();
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(e) if e.not_found() => return Ok(layer),
        Err(e) => return Err(e.into()),
    };

    for entry in entries {
        let (key, raw) = entry?;
        let key = key.to_lowercase();
        if ENV_KEYS.contains(&key.as_str()) {
            let value = raw
                .parse::<Value>()
                .unwrap_or_else(|_| Value::from(raw.clone()));
            layer.insert(key, value);
        }
    }
    Ok(layer)
}

/// Load settings from every layer.
///
/// Variables already present in the environment take precedence over the
/// ones in `.env`.
pub fn load_settings(config_file: Option<&Path>) -> Result<Settings, StartupError> {
    let settings = Settings::figment(config_file)?.extract::<Settings>()?;
    Ok(settings)
}

/// Render the JSON schema for the settings.
pub fn settings_schema() -> Result<String, serde_json::Error> {
    let schema = schema_for!(Settings);
    serde_json::to_string_pretty(&schema)
}
