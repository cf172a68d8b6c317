//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::{SiteConfig, CONFIG_FILE};
use crate::content::SeedOutcome;
use crate::Folio;

/// Initialize a site in `target_dir`: default config plus seeded content
///
/// An existing `_config.yml` or content directory is left alone.
pub fn init_site(target_dir: &Path) -> Result<SeedOutcome> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        let header = "# folio site configuration\n";
        fs::write(
            &config_path,
            format!("{}{}", header, SiteConfig::default().to_yaml()?),
        )?;
        tracing::info!("Wrote {:?}", config_path);
    }

    let folio = Folio::new(target_dir)?;
    folio.ensure_seeded()
}
