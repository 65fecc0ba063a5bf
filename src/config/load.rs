use super::{ConfigError, Settings};
use std::path::PathBuf;

pub const SETTINGS_PATH_ENV: &str = "DIRBIND_SETTINGS";

/// Reads the file named by `DIRBIND_SETTINGS`, or falls back to defaults when the
/// variable is unset or blank.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let path = std::env::var(SETTINGS_PATH_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);
    let settings = match path {
        Some(path) => Settings::from_path(&path)?,
        None => Settings::default(),
    };
    settings.validate()?;
    Ok(settings)
}
