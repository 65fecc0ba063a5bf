use super::ConfigError;
use crate::messages::Locale;
use crate::shared::serde_ext::blank_as_none_path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_REST_BASE: &str = "rest/";
pub const DEFAULT_QUERY_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "default_rest_base")]
    pub rest_base: String,
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
    #[serde(default, deserialize_with = "blank_as_none_path")]
    pub log_path: Option<PathBuf>,
    #[serde(default)]
    pub locale: Locale,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rest_base: default_rest_base(),
            query_timeout_ms: default_query_timeout_ms(),
            log_path: None,
            locale: Locale::default(),
        }
    }
}

fn default_rest_base() -> String {
    DEFAULT_REST_BASE.to_string()
}

fn default_query_timeout_ms() -> u64 {
    DEFAULT_QUERY_TIMEOUT_MS
}

impl Settings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&raw, &path.display().to_string())
    }

    pub fn from_yaml(raw: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rest_base.trim().is_empty() {
            return Err(ConfigError::Settings(
                "`rest_base` must be non-empty".to_string(),
            ));
        }
        if !self.rest_base.ends_with('/') {
            return Err(ConfigError::Settings(format!(
                "`rest_base` must end with `/`, got `{}`",
                self.rest_base
            )));
        }
        if self.query_timeout_ms == 0 {
            return Err(ConfigError::Settings(
                "`query_timeout_ms` must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}
