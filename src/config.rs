use crate::app::keymap::KeyConfig;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PanelConfig {
    pub title: String,
    pub section_label: String,
    pub expanded_width: u16,
    pub collapsed_width: u16,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "Storage Admin".to_string(),
            section_label: "Storage Systems".to_string(),
            expanded_width: 32,
            collapsed_width: 5,
        }
    }
}

/// Contents of `~/.config/storenav/config.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AppConfig {
    pub theme: PaletteType,
    pub panel: PanelConfig,
    pub keys: KeyConfig,
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("storenav");
        path
    })
}

impl AppConfig {
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads `path` if given, otherwise the default location.
    ///
    /// Only the default location may be missing; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_toml_str(&content, &path),
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        };
        // Border plus one column of content
        if self.panel.collapsed_width < 3 {
            return Err(invalid(format!(
                "panel.collapsed-width must be at least 3, got {}",
                self.panel.collapsed_width
            )));
        }
        if self.panel.expanded_width <= self.panel.collapsed_width {
            return Err(invalid(format!(
                "panel.expanded-width ({}) must be larger than panel.collapsed-width ({})",
                self.panel.expanded_width, self.panel.collapsed_width
            )));
        }
        Ok(())
    }
}
