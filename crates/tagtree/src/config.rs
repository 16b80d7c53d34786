//! Configuration file (tagtree.toml).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tagtree_render::RenderOptions;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub render: RenderOptions,
    #[serde(default)]
    pub catalogue: CatalogueSettings,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct CatalogueSettings {
    /// Offer legacy elements such as `menuitem` and `shadow`
    #[serde(default = "default_include_obsolete")]
    pub include_obsolete: bool,
}

impl Default for CatalogueSettings {
    fn default() -> Self {
        Self {
            include_obsolete: default_include_obsolete(),
        }
    }
}

fn default_include_obsolete() -> bool {
    true
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}
