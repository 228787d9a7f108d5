//! User settings (~/.rhythmview/config.json)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::types::{Result, RhythmError};

/// Default profile API base URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Hour label stride used when nothing is configured
pub const DEFAULT_HOUR_STRIDE: u8 = 3;

/// Theme selection; `Auto` probes the terminal background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Auto,
    Dark,
    Light,
}

/// Settings file contents; every field is optional on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub hour_stride: u8,
    pub theme: ThemeChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            hour_stride: DEFAULT_HOUR_STRIDE,
            theme: ThemeChoice::Auto,
        }
    }
}

impl Settings {
    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load from a specific path. A missing file yields defaults; an
    /// unreadable or invalid one is a config error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| RhythmError::Config(format!("{}: {}", path.display(), e)))?;
        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| RhythmError::Config(format!("{}: {}", path.display(), e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the renderer cannot use
    pub fn validate(&self) -> Result<()> {
        if !(1..=24).contains(&self.hour_stride) {
            return Err(RhythmError::Config(format!(
                "hour_stride must be within 1..=24, got {}",
                self.hour_stride
            )));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(RhythmError::Config("api_base_url is empty".into()));
        }
        Ok(())
    }

    /// Application directory (~/.rhythmview)
    pub fn app_dir() -> Result<PathBuf> {
        let home = directories::UserDirs::new()
            .ok_or_else(|| RhythmError::Config("Failed to get home directory".into()))?
            .home_dir()
            .to_path_buf();
        Ok(home.join(".rhythmview"))
    }

    /// Default settings path (~/.rhythmview/config.json)
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(s.hour_stride, 3);
        assert_eq!(s.theme, ThemeChoice::Auto);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let s = Settings::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_partial_file_merges_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"hour_stride": 6, "theme": "light"}"#).unwrap();

        let s = Settings::load_from(&path).unwrap();
        assert_eq!(s.hour_stride, 6);
        assert_eq!(s.theme, ThemeChoice::Light);
        assert_eq!(s.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, RhythmError::Config(_)));
    }

    #[test]
    fn test_zero_stride_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"hour_stride": 0}"#).unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("hour_stride"));
    }
}
