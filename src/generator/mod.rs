//! Static site generator - pre-renders every blog page into the public dir

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::ContentStore;
use crate::templates::TemplateRenderer;
use crate::Folio;

/// Summary of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub posts: usize,
    pub files: Vec<PathBuf>,
}

/// Writes rendered pages below the public directory
pub struct Generator {
    store: ContentStore,
    renderer: TemplateRenderer,
    public_dir: PathBuf,
}

impl Generator {
    pub fn new(folio: &Folio) -> Self {
        Self {
            store: folio.store(),
            renderer: TemplateRenderer::new(folio.config.clone()),
            public_dir: folio.public_dir.clone(),
        }
    }

    /// Render the listing, one page per slug, and the not-found page
    pub fn generate(&self) -> Result<GenerateReport> {
        let posts = self.store.list_all()?;
        let blog_dir = self.public_dir.join("blog");
        let mut files = Vec::new();

        files.push(write_page(
            &blog_dir.join("index.html"),
            &self.renderer.blog_index(&posts),
        )?);

        for post in &posts {
            let path = blog_dir.join(&post.slug).join("index.html");
            files.push(write_page(&path, &self.renderer.post_page(post))?);
            tracing::debug!("Rendered {} -> {:?}", post.slug, path);
        }

        files.push(write_page(
            &self.public_dir.join("404.html"),
            &self.renderer.not_found(),
        )?);

        Ok(GenerateReport {
            posts: posts.len(),
            files,
        })
    }
}

fn write_page(path: &Path, html: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {:?}", parent))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(path.to_path_buf())
}
