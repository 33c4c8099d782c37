// Scanner configuration

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Time zone used when none is configured
pub const DEFAULT_TIME_ZONE: &str = "Australia/Sydney";

/// Environment variable overriding the configured time zone
pub const TIME_ZONE_ENV: &str = "SCALE_BARCODE_TZ";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Settings shared by every scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanConfig {
    /// IANA name of the zone packing dates are interpreted in
    pub time_zone: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE.to_string(),
        }
    }
}

impl ScanConfig {
    pub fn with_time_zone(time_zone: impl Into<String>) -> Self {
        Self {
            time_zone: time_zone.into(),
        }
    }

    /// Defaults, with the time zone taken from `SCALE_BARCODE_TZ` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_override(std::env::var(TIME_ZONE_ENV).ok());
        config
    }

    fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(tz) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            tracing::debug!("Time zone overridden from environment: {}", tz);
            self.time_zone = tz;
        }
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Look up the configured zone
    pub fn resolve_time_zone(&self) -> Result<Tz> {
        parse_time_zone(&self.time_zone)
    }
}

/// Parse an IANA time zone name such as "Europe/Berlin"
pub fn parse_time_zone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ConfigError::UnknownTimeZone(name.to_string()))
}
