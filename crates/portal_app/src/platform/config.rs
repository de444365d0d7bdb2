use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use portal_engine::ClientSettings;
use portal_logging::{portal_info, portal_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::{LogDestination, LogLevel};

pub const DEFAULT_CONFIG_FILENAME: &str = "portal.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Origin the page is served from; the analysis path is appended to it.
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_response_bytes: u64,
    pub log_destination: LogDestination,
    pub log_level: LogLevel,
    pub log_file: PathBuf,
}

impl Default for PortalConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            base_url: client.base_url,
            connect_timeout_secs: client.connect_timeout.as_secs(),
            request_timeout_secs: client.request_timeout.as_secs(),
            max_response_bytes: client.max_bytes,
            log_destination: LogDestination::default(),
            log_level: LogLevel::default(),
            log_file: PathBuf::from("./portal.log"),
        }
    }
}

impl PortalConfig {
    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn client_settings(&self) -> ClientSettings {
        if self.request_timeout_secs == 0 {
            portal_warn!("request_timeout_secs is 0; requests will time out immediately");
        }
        portal_info!(
            "Analysis endpoint origin {} (timeout {}s)",
            self.base_url,
            self.request_timeout_secs
        );
        ClientSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_response_bytes,
        }
    }
}
