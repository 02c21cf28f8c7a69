//! # Credentials Module
//!
//! Loads the rank service credentials and the user's opt-out settings. A
//! missing or unusable credentials file is the normal state for a user who
//! never registered, so every failure here maps to "not configured" rather
//! than an error. A missing or unusable settings file means "enabled, no
//! exclusions".

use directories::BaseDirs;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::{Credentials, RankSettings};
use crate::models::credentials::DEFAULT_SERVER_URL;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no home directory")]
    NoHome,
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse credentials: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to parse settings: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("credentials have no api_key")]
    MissingApiKey,
}

/// Where credentials come from. Tests swap in a temp file or a fixed value.
pub trait CredentialsSource {
    fn load(&self) -> Result<Credentials, ConfigError>;
}

#[derive(Debug, Deserialize)]
struct CredentialsFileDto {
    api_key: Option<String>,
    server_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SettingsFileDto {
    rank: Option<RankSectionDto>,
}

#[derive(Debug, Deserialize)]
struct RankSectionDto {
    enabled: Option<bool>,
    exclude_projects: Option<Vec<String>>,
}

fn rank_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|b| b.home_dir().join(".modu").join("rank"))
}

/// Default location: `~/.modu/rank/credentials.json`.
pub fn default_credentials_path() -> Option<PathBuf> {
    rank_dir().map(|d| d.join("credentials.json"))
}

/// Default location: `~/.modu/rank/config.yaml`.
pub fn default_settings_path() -> Option<PathBuf> {
    rank_dir().map(|d| d.join("config.yaml"))
}

/// Credentials stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileCredentials {
    path: Option<PathBuf>,
}

impl FileCredentials {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The well-known path under the user's home directory.
    pub fn default_location() -> Self {
        Self {
            path: default_credentials_path(),
        }
    }
}

impl CredentialsSource for FileCredentials {
    fn load(&self) -> Result<Credentials, ConfigError> {
        let path = self.path.as_deref().ok_or(ConfigError::NoHome)?;
        let content = std::fs::read_to_string(path)?;
        parse_credentials(&content)
    }
}

impl CredentialsSource for Credentials {
    fn load(&self) -> Result<Credentials, ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(self.clone())
    }
}

pub fn parse_credentials(content: &str) -> Result<Credentials, ConfigError> {
    let dto: CredentialsFileDto = serde_json::from_str(content)?;
    let api_key = dto
        .api_key
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .ok_or(ConfigError::MissingApiKey)?;
    let server_url = dto
        .server_url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
    Ok(Credentials { api_key, server_url })
}

/// Load credentials, collapsing every failure into `None` ("not configured").
pub fn load_credentials(source: &dyn CredentialsSource) -> Option<Credentials> {
    match source.load() {
        Ok(creds) => Some(creds),
        Err(err) => {
            tracing::debug!(error = %err, "rank credentials not configured");
            None
        }
    }
}

/// Opt-out settings stored as YAML on disk.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: Option<PathBuf>,
}

impl FileSettings {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The well-known path under the user's home directory.
    pub fn default_location() -> Self {
        Self {
            path: default_settings_path(),
        }
    }

    fn try_load(&self) -> Result<RankSettings, ConfigError> {
        let path = self.path.as_deref().ok_or(ConfigError::NoHome)?;
        let content = std::fs::read_to_string(path)?;
        parse_settings(&content)
    }

    /// Read the settings, falling back to the defaults on any failure.
    pub fn load(&self) -> RankSettings {
        self.try_load().unwrap_or_else(|err| {
            tracing::debug!(error = %err, "using default rank settings");
            RankSettings::default()
        })
    }
}

pub fn parse_settings(content: &str) -> Result<RankSettings, ConfigError> {
    if content.trim().is_empty() {
        return Ok(RankSettings::default());
    }
    let dto: SettingsFileDto = serde_yaml::from_str(content)?;
    let Some(rank) = dto.rank else {
        return Ok(RankSettings::default());
    };
    Ok(RankSettings {
        enabled: rank.enabled.unwrap_or(true),
        exclude_projects: rank.exclude_projects.unwrap_or_default(),
    })
}
