//! Configuration file handling (recipebook.toml).

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure (recipebook.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// Directory of user recipe files
    #[serde(default = "default_recipes_dir")]
    pub dir: String,

    /// Output directory for the built site
    #[serde(default = "default_output")]
    pub output: String,

    /// Site title
    #[serde(default = "default_title")]
    pub title: String,

    /// Base URL for the built site
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: default_recipes_dir(),
            output: default_output(),
            title: default_title(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_minify")]
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
        }
    }
}

fn default_recipes_dir() -> String {
    "recipes".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_title() -> String {
    "Frontend Recipes".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_minify() -> bool {
    true
}

impl ConfigFile {
    /// The recipes directory, if it exists on disk.
    ///
    /// A fresh project without a recipes directory just serves the built-in
    /// catalog, so absence is not an error here.
    pub fn recipes_dir(&self) -> Option<PathBuf> {
        let dir = PathBuf::from(&self.catalog.dir);
        dir.exists().then_some(dir)
    }
}

/// Load configuration from recipebook.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load() -> Result<ConfigFile> {
    let config_path = PathBuf::from("recipebook.toml");
    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read recipebook.toml: {}", e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse recipebook.toml: {}", e))?;
        tracing::debug!("Loaded config from recipebook.toml");
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
