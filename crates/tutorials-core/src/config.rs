use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::youtube::ThumbnailQuality;

/// Global configuration loaded from `~/.config/tutorials/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialsConfig {
    /// Collection that `check` validates against when none is given.
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Thumbnail quality used when a command does not pick one.
    #[serde(default)]
    pub thumbnail_quality: ThumbnailQuality,
}

fn default_collection() -> String {
    crate::collection::TUTORIALS.name.to_string()
}

impl Default for TutorialsConfig {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            thumbnail_quality: ThumbnailQuality::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tutorials")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TutorialsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TutorialsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. Missing keys take defaults.
pub fn load_from(path: &Path) -> Result<TutorialsConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: TutorialsConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
