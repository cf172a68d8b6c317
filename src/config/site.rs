//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::reading_time::DEFAULT_WORDS_PER_MINUTE;

/// Configuration file name inside the site base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Writing
    pub words_per_minute: u32,
    pub preview_count: usize,

    // Highlighting
    pub highlight_theme: String,
    pub line_numbers: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: "My thoughts, tutorials, and insights about web development, frontend technologies, and design.".to_string(),
            author: "Site Author".to_string(),
            language: "en".to_string(),

            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),

            content_dir: "content/blog".to_string(),
            public_dir: "public".to_string(),

            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            preview_count: 3,

            highlight_theme: "base16-ocean.dark".to_string(),
            line_numbers: false,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Load `_config.yml` from `base_dir`, falling back to defaults when absent
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let path = base_dir.as_ref().join(CONFIG_FILE);
        if path.exists() {
            let config = Self::load(&path)?;
            tracing::debug!("Loaded config from {:?}", path);
            Ok(config)
        } else {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }

    /// Render the default configuration file written by `init`
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
