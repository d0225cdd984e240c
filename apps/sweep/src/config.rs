//! User configuration.
//!
//! Stored as TOML:
//! - Linux/macOS: `~/.config/steamsweep/config.toml`
//! - Windows: `%APPDATA%/steamsweep/config.toml`
//!
//! A missing file means defaults; nothing is written back.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use steamsweep_ranker::SortKey;

/// steamsweep configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Steam install directory; auto-detected when unset.
    #[serde(default)]
    pub steam_root: Option<PathBuf>,

    /// Default ordering of `list`.
    #[serde(default)]
    pub sort_by: SortKey,

    #[serde(default)]
    pub descending: bool,

    /// Maximum number of rows printed by `list`.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Config {
    /// Loads the configuration file, or defaults if there is none.
    pub fn load() -> anyhow::Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file, or defaults if it is missing.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }
}

/// Returns the platform-specific configuration file path.
fn config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(|appdata| PathBuf::from(appdata).join("steamsweep").join("config.toml"))
    }

    #[cfg(not(target_os = "windows"))]
    {
        std::env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("steamsweep")
                .join("config.toml")
        })
    }
}
