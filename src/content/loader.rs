//! Content store - loads posts from the content directory

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::{ContentError, Result};
use super::{frontmatter, reading_time, seed, Post};

/// Recognized extensions, in lookup priority order
pub const EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Result of [`ContentStore::ensure_seeded`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The directory was missing and this many seed posts were written
    Seeded(usize),
    /// The directory already existed and was left untouched
    AlreadyPresent,
}

/// Reads posts from a flat directory of Markdown files
///
/// Nothing is cached: every query re-reads the directory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    dir: PathBuf,
    words_per_minute: u32,
}

impl ContentStore {
    /// Create a store over `dir` with the default reading speed
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self::with_reading_speed(dir, reading_time::DEFAULT_WORDS_PER_MINUTE)
    }

    pub fn with_reading_speed<P: AsRef<Path>>(dir: P, words_per_minute: u32) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            words_per_minute,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the content directory with the sample posts if it is absent
    ///
    /// Run once at startup; queries never create content on their own.
    pub fn ensure_seeded(&self) -> Result<SeedOutcome> {
        if self.dir.exists() {
            return Ok(SeedOutcome::AlreadyPresent);
        }

        fs::create_dir_all(&self.dir).map_err(|e| ContentError::io(&self.dir, e))?;
        let count = seed::write_seed_posts(&self.dir)?;
        tracing::info!("Seeded {} sample posts into {:?}", count, self.dir);

        Ok(SeedOutcome::Seeded(count))
    }

    /// Load every post, newest first
    ///
    /// Files with bad front matter are logged and skipped. When `a.mdx` and
    /// `a.md` both exist the `.mdx` file wins, as in [`Self::get_by_slug`].
    pub fn list_all(&self) -> Result<Vec<Post>> {
        let mut posts: Vec<Post> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for path in self.content_files()? {
            let Some(slug) = slug_of(&path).filter(|s| is_valid_slug(s)) else {
                tracing::warn!("Skipping {:?}: file name is not a usable slug", path);
                continue;
            };

            // A broken `.mdx` still shadows its `.md` sibling, as in lookup
            if !seen.insert(slug.clone()) {
                tracing::warn!("Skipping {:?}: slug '{}' is already taken", path, slug);
                continue;
            }

            match self.load_post(&path, &slug) {
                Ok(post) => posts.push(post),
                Err(ContentError::FrontMatter { path, source }) => {
                    tracing::warn!("Skipping post {:?}: {}", path, source);
                }
                Err(e) => return Err(e),
            }
        }

        // Plain string comparison; ISO-8601 dates sort chronologically.
        // The sort is stable, so equal dates keep file-name order.
        posts.sort_by(|a, b| b.metadata.date.cmp(&a.metadata.date));

        Ok(posts)
    }

    /// Look up a single post by slug
    ///
    /// Returns `Ok(None)` when no file matches or when the matching file
    /// cannot be parsed; only I/O failures are errors.
    pub fn get_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        if !is_valid_slug(slug) {
            tracing::debug!("Rejected slug {:?}", slug);
            return Ok(None);
        }

        for ext in EXTENSIONS {
            let path = self.dir.join(format!("{}.{}", slug, ext));
            match self.load_post(&path, slug) {
                Ok(post) => return Ok(Some(post)),
                Err(ContentError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                    continue
                }
                Err(ContentError::FrontMatter { path, source }) => {
                    tracing::error!("Failed to parse post {:?}: {}", path, source);
                    return Ok(None);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(None)
    }

    /// Slugs of all posts, in listing order
    pub fn slugs(&self) -> Result<Vec<String>> {
        Ok(self.list_all()?.into_iter().map(|p| p.slug).collect())
    }

    /// Read and parse one content file
    pub fn load_post(&self, path: &Path, slug: &str) -> Result<Post> {
        let content = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let (metadata, body) =
            frontmatter::parse_document(&content).map_err(|e| ContentError::front_matter(path, e))?;
        let reading_time_minutes = reading_time::minutes(&body, self.words_per_minute);

        tracing::debug!("Loaded post '{}' from {:?}", slug, path);

        Ok(Post {
            slug: slug.to_string(),
            body,
            metadata,
            reading_time_minutes,
            source: path.to_path_buf(),
        })
    }

    /// Content files directly inside the directory, `.mdx` before `.md` for
    /// the same stem, otherwise sorted by file name
    fn content_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.dir.as_path()).to_path_buf();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::new(ErrorKind::Other, "filesystem loop"));
                ContentError::io(path, source)
            })?;

            let path = entry.path();
            if entry.file_type().is_file() && is_content_file(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort_by(|a, b| {
            let key = |p: &Path| {
                let rank = extension_rank(p).unwrap_or(EXTENSIONS.len());
                (slug_of(p), rank)
            };
            key(a).cmp(&key(b))
        });

        Ok(files)
    }
}

/// Check if a file has one of the recognized extensions
fn is_content_file(path: &Path) -> bool {
    extension_rank(path).is_some()
}

fn extension_rank(path: &Path) -> Option<usize> {
    let ext = path.extension()?.to_str()?;
    EXTENSIONS.iter().position(|e| *e == ext)
}

fn slug_of(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// A slug must be a single plain path segment
fn is_valid_slug(slug: &str) -> bool {
    lazy_static! {
        static ref SLUG: Regex = Regex::new(r"^[\p{L}\p{N}_-][\p{L}\p{N}._-]*$").unwrap();
    }
    SLUG.is_match(slug)
}
