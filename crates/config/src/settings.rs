// Application settings
// Loaded from ~/.config/vansplit/settings.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use vansplit_engine::report::{
    DEFAULT_HASHED_NAME, DEFAULT_INVALID_NAME, DEFAULT_MAPPED_NAME, DEFAULT_OUTPUT_DIR,
    DEFAULT_RISKY_NAME, DEFAULT_URL_PREFIX, DEFAULT_VALID_NAME,
};

/// Output file names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameSettings {
    pub valid: String,
    pub invalid: String,
    pub risky: String,
    /// Combined file with every joined row and its category
    pub mapped: String,
    /// Output of `vansplit hash`
    pub hashed: String,
}

impl Default for NameSettings {
    fn default() -> Self {
        Self {
            valid: DEFAULT_VALID_NAME.into(),
            invalid: DEFAULT_INVALID_NAME.into(),
            risky: DEFAULT_RISKY_NAME.into(),
            mapped: DEFAULT_MAPPED_NAME.into(),
            hashed: DEFAULT_HASHED_NAME.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory output files are written to
    pub output_dir: PathBuf,

    /// Prefix for download URLs in run reports
    pub download_url_prefix: String,

    /// Write the combined mapped file alongside the partitions
    pub write_mapped: bool,

    pub names: NameSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            download_url_prefix: DEFAULT_URL_PREFIX.into(),
            write_mapped: true,
            names: NameSettings::default(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vansplit")
            .join("settings.toml")
    }

    /// Load settings from the default location, falling back to defaults.
    ///
    /// A missing file is fine; an unreadable or malformed one is an error.
    pub fn load() -> Result<Self, String> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load settings from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        Self::from_toml(&contents).map_err(|e| format!("{}: {e}", path.display()))
    }

    pub fn from_toml(input: &str) -> Result<Self, String> {
        toml::from_str(input).map_err(|e| e.to_string())
    }

    /// Get the config file path for display
    pub fn config_path_display() -> String {
        Self::config_path().to_string_lossy().to_string()
    }
}
