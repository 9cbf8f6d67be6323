//! Client configuration
//!
//! Resolution order:
//! 1. `MIRAI_SERVER_URL` environment variable (server URL only)
//! 2. TOML file named by `MIRAI_CONFIG`
//! 3. `<config dir>/mirai/config.toml`
//! 4. Compiled defaults

use crate::error::ConfigError;
use reqwest::Url;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";
pub const SERVER_URL_ENV: &str = "MIRAI_SERVER_URL";
pub const CONFIG_PATH_ENV: &str = "MIRAI_CONFIG";

const DEFAULT_DROP_SETTLE_MS: u64 = 150;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root of the analysis server; endpoint paths are resolved against it.
    pub server_url: String,
    /// Per-request timeout applied by the HTTP transport. Unset means none.
    pub request_timeout_secs: Option<u64>,
    /// Quiet period after the last dropped file before the batch is uploaded.
    pub drop_settle_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout_secs: None,
            drop_settle_ms: DEFAULT_DROP_SETTLE_MS,
        }
    }
}

impl ClientConfig {
    pub fn load() -> Self {
        Self::resolve(
            std::env::var(SERVER_URL_ENV).ok(),
            std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from),
            default_config_path(),
        )
    }

    fn resolve(
        url_override: Option<String>,
        explicit_path: Option<PathBuf>,
        default_path: Option<PathBuf>,
    ) -> Self {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(&path).unwrap_or_else(|err| {
                log::warn!("{err}; using defaults");
                Self::default()
            }),
            None => default_path
                .filter(|path| path.exists())
                .map(|path| {
                    Self::from_file(&path).unwrap_or_else(|err| {
                        log::warn!("{err}; using defaults");
                        Self::default()
                    })
                })
                .unwrap_or_default(),
        };

        if let Some(url) = url_override.filter(|url| !url.trim().is_empty()) {
            config.server_url = url.trim().to_string();
        }

        if let Err(err) = config.base_url() {
            log::warn!("{err}; falling back to {DEFAULT_SERVER_URL}");
            config.server_url = DEFAULT_SERVER_URL.to_string();
        }

        log::info!("Using analysis server at {}", config.server_url);
        config
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.server_url).map_err(|err| ConfigError::InvalidServerUrl {
            url: self.server_url.clone(),
            reason: err.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidServerUrl {
                url: self.server_url.clone(),
                reason: "not a base URL".to_string(),
            });
        }

        Ok(url)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn drop_settle(&self) -> Duration {
        Duration::from_millis(self.drop_settle_ms)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mirai").join("config.toml"))
}
