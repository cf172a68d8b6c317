//! Error types for the content store

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while splitting or validating front matter
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("missing front matter (file must start with a `---` line)")]
    Missing,

    #[error("front matter is not terminated by a closing `---` line")]
    Unterminated,

    #[error("invalid YAML in front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid field `{field}`: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

/// Content store errors
#[derive(Error, Debug)]
pub enum ContentError {
    /// Filesystem failure. Always fatal for the current query.
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single content file could not be parsed.
    #[error("front matter error in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("invalid draft: {}", .0.join("; "))]
    InvalidDraft(Vec<String>),

    #[error("post already exists: {0}")]
    AlreadyExists(PathBuf),
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn front_matter(path: impl Into<PathBuf>, source: FrontMatterError) -> Self {
        Self::FrontMatter {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for content operations
pub type Result<T> = std::result::Result<T, ContentError>;
