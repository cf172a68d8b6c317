//! Generate static files

use anyhow::Result;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::config::CONFIG_FILE;
use crate::generator::{GenerateReport, Generator};
use crate::Folio;

/// Generate the static site
pub fn run(folio: &Folio) -> Result<()> {
    generate(folio).map(|_| ())
}

/// Generate and return what was written
pub fn generate(folio: &Folio) -> Result<GenerateReport> {
    let start = std::time::Instant::now();

    folio.ensure_seeded()?;
    let report = Generator::new(folio).generate()?;

    tracing::info!(
        "Generated {} posts ({} files) in {:.2}s",
        report.posts,
        report.files.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Watch content and config for changes and regenerate
pub fn watch(folio: &Folio) -> Result<()> {
    let (tx, rx) = channel::<DebounceEventResult>();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    if folio.content_dir.exists() {
        debouncer
            .watcher()
            .watch(&folio.content_dir, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", folio.content_dir);
    }

    let config_path = folio.base_dir.join(CONFIG_FILE);
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                for event in &events {
                    tracing::info!("File changed: {}", event.path.display());
                }

                // Config edits may move directories, so reopen the site
                let result = Folio::new(&folio.base_dir).and_then(|fresh| run(&fresh));
                if let Err(e) = result {
                    tracing::error!("Generation failed: {}", e);
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_seeds_missing_content() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let report = generate(&folio).unwrap();
        assert_eq!(report.posts, 3);
        assert!(folio.content_dir.is_dir());
        assert!(folio.public_dir.join("blog/index.html").is_file());
    }
}
