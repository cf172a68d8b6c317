//! Create a new post from a validated draft

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::frontmatter::{stringify, Metadata};
use crate::content::loader::EXTENSIONS;
use crate::content::ContentError;
use crate::helpers::today;
use crate::Folio;

const MIN_TITLE: usize = 5;
const MIN_DESCRIPTION: usize = 10;
const MIN_CATEGORIES: usize = 3;
const MIN_CONTENT: usize = 50;

/// Fields of the new-post form
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    /// Comma-separated category names
    pub categories: String,
    pub content: String,
}

impl NewPost {
    /// Check every field, reporting all failures at once
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut problems = Vec::new();

        let checks = [
            (&self.title, MIN_TITLE, "Title must be at least 5 characters."),
            (
                &self.description,
                MIN_DESCRIPTION,
                "Description must be at least 10 characters.",
            ),
            (
                &self.categories,
                MIN_CATEGORIES,
                "Please add at least one category.",
            ),
            (
                &self.content,
                MIN_CONTENT,
                "Content must be at least 50 characters.",
            ),
        ];
        for (value, min, message) in checks {
            if value.trim().chars().count() < min {
                problems.push(message.to_string());
            }
        }

        let categories_long_enough = self.categories.trim().chars().count() >= MIN_CATEGORIES;
        if categories_long_enough && self.category_list().is_empty() {
            problems.push("Please add at least one category.".to_string());
        }

        if slug::slugify(&self.title).is_empty() && self.title.trim().chars().count() >= MIN_TITLE {
            problems.push("Title must contain letters or digits.".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ContentError::InvalidDraft(problems))
        }
    }

    pub fn slug(&self) -> String {
        slug::slugify(&self.title)
    }

    /// Build front matter dated `date`
    pub fn metadata(&self, date: &str) -> Metadata {
        Metadata {
            title: self.title.trim().to_string(),
            date: date.to_string(),
            description: self.description.trim().to_string(),
            categories: self.category_list(),
            image: None,
        }
    }

    fn category_list(&self) -> Vec<String> {
        self.categories
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Full file content for this draft
    pub fn render(&self, date: &str) -> Result<String, ContentError> {
        self.validate()?;
        let body = format!("\n{}\n", self.content.trim());
        stringify(&self.metadata(date), &body)
            .map_err(|e| ContentError::front_matter(format!("{}.mdx", self.slug()), e))
    }
}

/// Write a validated draft as `<slug>.mdx` in the content directory
pub fn create_post(folio: &Folio, draft: &NewPost) -> Result<PathBuf> {
    let content = draft.render(&today())?;
    let slug = draft.slug();

    fs::create_dir_all(&folio.content_dir)?;

    for ext in EXTENSIONS {
        let existing = folio.content_dir.join(format!("{}.{}", slug, ext));
        if existing.exists() {
            return Err(ContentError::AlreadyExists(existing).into());
        }
    }

    let file_path = folio.content_dir.join(format!("{}.{}", slug, EXTENSIONS[0]));
    fs::write(&file_path, content)?;
    tracing::info!("Created post '{}' at {:?}", slug, file_path);

    Ok(file_path)
}

/// Run the new command; with `dry_run` the document is printed, not written
pub fn run(folio: &Folio, draft: &NewPost, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", draft.render(&today())?);
        return Ok(());
    }

    let path = create_post(folio, draft)?;
    println!("Created: {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewPost {
        NewPost {
            title: "Writing Rust CLIs".to_string(),
            description: "Notes on building command-line tools.".to_string(),
            categories: "Rust, CLI , ".to_string(),
            content: "Clap makes argument parsing declarative and the rest follows from there."
                .to_string(),
        }
    }

    #[test]
    fn test_validate_reports_every_field() {
        let err = NewPost::default().validate().unwrap_err();
        match err {
            ContentError::InvalidDraft(problems) => assert_eq!(problems.len(), 4),
            other => panic!("unexpected error: {other}"),
        }
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_separators_only_categories_rejected() {
        let mut draft = draft();
        draft.categories = ", , ,".to_string();
        match draft.validate().unwrap_err() {
            ContentError::InvalidDraft(problems) => {
                assert_eq!(problems, vec!["Please add at least one category.".to_string()])
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_metadata_splits_categories() {
        let meta = draft().metadata("2024-05-01");
        assert_eq!(meta.categories, vec!["Rust", "CLI"]);
        assert_eq!(meta.date, "2024-05-01");
        assert_eq!(draft().slug(), "writing-rust-clis");
    }

    #[test]
    fn test_create_post_is_listed() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let path = create_post(&folio, &draft()).unwrap();
        assert!(path.ends_with("writing-rust-clis.mdx"));

        let post = folio.store().get_by_slug("writing-rust-clis").unwrap().unwrap();
        assert_eq!(post.metadata.title, "Writing Rust CLIs");
        assert_eq!(post.reading_time_minutes, 1);

        let err = create_post(&folio, &draft()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ContentError>(),
            Some(ContentError::AlreadyExists(_))
        ));
    }
}
