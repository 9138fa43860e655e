use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{address::parse_location, http::DEFAULT_TIMEOUT};

pub const DEFAULT_IP_LOOKUP_URL: &str = "https://myip.ipip.net/json";
pub const DEFAULT_WEATHER_URL: &str = "https://wis.qq.com/weather/common";

/// Endpoint overrides, mostly useful for proxies and tests.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Endpoints {
    pub ip_lookup: Option<String>,
    pub weather: Option<String>,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Canonical location used by `show` when none is given, e.g. "广东省广州市".
    /// When unset the location is resolved from the public IP.
    pub default_location: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Example TOML:
    /// [endpoints]
    /// weather = "https://wis.qq.com/weather/common"
    pub endpoints: Endpoints,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        self.timeout_secs.map(Duration::from_secs).unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn ip_lookup_url(&self) -> &str {
        self.endpoints.ip_lookup.as_deref().unwrap_or(DEFAULT_IP_LOOKUP_URL)
    }

    pub fn weather_url(&self) -> &str {
        self.endpoints.weather.as_deref().unwrap_or(DEFAULT_WEATHER_URL)
    }

    /// Store a default location after checking that the weather service could accept it.
    pub fn set_default_location(&mut self, location: &str) -> Result<()> {
        parse_location(location)?;
        self.default_location = Some(location.to_string());
        Ok(())
    }

    pub fn clear_default_location(&mut self) {
        self.default_location = None;
    }

    pub fn set_timeout_secs(&mut self, secs: u64) -> Result<()> {
        check_timeout_secs(secs)?;
        self.timeout_secs = Some(secs);
        Ok(())
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        if let Some(location) = &cfg.default_location {
            parse_location(location).context("Invalid `default_location`")?;
        }
        if let Some(secs) = cfg.timeout_secs {
            check_timeout_secs(secs).context("Invalid `timeout_secs`")?;
        }
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "qqweather", "qqweather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn check_timeout_secs(secs: u64) -> Result<()> {
    if secs == 0 {
        return Err(anyhow!("Timeout must be at least one second"));
    }
    Ok(())
}
