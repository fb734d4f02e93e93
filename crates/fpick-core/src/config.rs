//! User settings.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("No config directory")]
    NoConfigDir,

    #[error("Failed to read settings at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid settings: {message}")]
    Invalid { message: String },
}

/// Settings for the explorer and batch operations.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Settings {
    /// Directory shown on startup (None = home directory).
    #[builder(default)]
    #[serde(default)]
    pub start_dir: Option<PathBuf>,

    /// Include hidden entries (starting with .).
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,

    /// Sort listings by name instead of keeping the platform's order.
    #[builder(default = "false")]
    #[serde(default)]
    pub sort_entries: bool,

    /// Send deleted items to the trash.
    #[builder(default = "false")]
    #[serde(default)]
    pub use_trash: bool,

    /// How many times the menu asks again after invalid input.
    #[builder(default = "3")]
    #[serde(default = "default_max_input_attempts")]
    pub max_input_attempts: u32,
}

fn default_true() -> bool {
    true
}

fn default_max_input_attempts() -> u32 {
    3
}

impl SettingsBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.max_input_attempts == Some(0) {
            return Err("max_input_attempts must be at least 1".to_string());
        }
        if let Some(Some(dir)) = &self.start_dir {
            if dir.as_os_str().is_empty() {
                return Err("start_dir cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_dir: None,
            include_hidden: true,
            sort_entries: false,
            use_trash: false,
            max_input_attempts: default_max_input_attempts(),
        }
    }
}

impl Settings {
    /// Create a new settings builder.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Get the default config file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("fpick").join("settings.toml"))
    }

    /// Load settings from the default location, or return defaults.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from `path`, failing on unreadable or invalid files.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if settings.max_input_attempts == 0 {
            return Err(SettingsError::Invalid {
                message: "max_input_attempts must be at least 1".to_string(),
            });
        }
        Ok(settings)
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::config_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save settings to `path`, creating parent directories if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let write_err = |source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(write_err)
    }
}
