use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "Shippex";
const APP_NAME: &str = "Shippex";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Runtime knobs, read from `config.json` in the platform config directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulated latency of the shipment list call.
    pub api_latency_ms: u64,
    /// Simulated latency of single-shipment lookups.
    pub lookup_latency_ms: u64,
    pub auth_latency_ms: u64,
    pub page_limit: usize,
    /// Check credentials against the auth service instead of signing in directly.
    pub verify_credentials: bool,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_latency_ms: 800,
            lookup_latency_ms: 600,
            auth_latency_ms: 1000,
            page_limit: 10,
            verify_credentials: false,
            log_filter: "info,shippex=debug".to_string(),
        }
    }
}

impl AppConfig {
    pub fn api_latency(&self) -> Duration {
        Duration::from_millis(self.api_latency_ms)
    }

    pub fn lookup_latency(&self) -> Duration {
        Duration::from_millis(self.lookup_latency_ms)
    }

    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// Reads the config file. An absent file yields the defaults; an unreadable
/// one is an error so the caller can report it once logging is up.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match config_file() {
        Some(path) if path.exists() => read_config(&path),
        _ => Ok(AppConfig::default()),
    }
}

fn read_config(path: &PathBuf) -> Result<AppConfig, ConfigError> {
    let data = fs::read_to_string(path)?;
    parse_config(&data)
}

fn parse_config(data: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_json::from_str(data)?)
}

/// Installs the process-wide config. Later calls are ignored.
pub fn install(config: AppConfig) -> &'static AppConfig {
    CONFIG.get_or_init(|| config)
}

/// The installed config, or defaults if `install` was never called.
pub fn current() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}
