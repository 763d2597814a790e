use std::env;
use std::fs;
use std::path::Path;
use serde::Deserialize;
use crate::errors::ConfigError;

const CONFIG_FILE: &str = "weatherview.toml";

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub web_server: WebServerConfig,
    pub forecast: ForecastConfig,
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct WebServerConfig {
    pub bind_address: String,
    pub bind_port: u16,
}

impl Default for WebServerConfig {
    fn default() -> Self {
        WebServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct ForecastConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        ForecastConfig {
            base_url: "https://api.open-meteo.com".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: "info".to_string() }
    }
}

/// Reads the application configuration
///
/// The file is optional and so is every field in it, missing parts fall
/// back to their defaults. The path can be overridden with the
/// WEATHERVIEW_CONFIG environment variable.
pub fn config() -> Result<Config, ConfigError> {
    let path = env::var("WEATHERVIEW_CONFIG").unwrap_or_else(|_| CONFIG_FILE.to_string());

    if !Path::new(&path).exists() {
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&raw)?;

    Ok(config)
}
