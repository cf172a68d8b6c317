//! folio: a file-backed blog engine for a personal portfolio site
//!
//! Posts live as Markdown files with YAML front matter in a flat content
//! directory. This crate loads them into typed values, estimates reading
//! time, and serves them as listing and detail pages, either pre-rendered
//! or from a small HTTP server.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::ContentStore;

/// A site rooted at one base directory
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the post files
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Folio {
    /// Open the site in `base_dir`, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::SiteConfig::load_or_default(&base_dir)?;

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        })
    }

    /// Content store over this site's content directory
    pub fn store(&self) -> ContentStore {
        ContentStore::with_reading_speed(&self.content_dir, self.config.words_per_minute)
    }

    /// Seed the content directory if it does not exist yet
    pub fn ensure_seeded(&self) -> Result<content::SeedOutcome> {
        Ok(self.store().ensure_seeded()?)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_follow_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(config::CONFIG_FILE),
            "content_dir: posts\npublic_dir: dist\n",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.content_dir, dir.path().join("posts"));
        assert_eq!(folio.public_dir, dir.path().join("dist"));
        assert_eq!(folio.store().dir(), dir.path().join("posts"));
    }
}
