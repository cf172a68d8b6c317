//! Post model and category grouping

use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

use super::Metadata;

/// A blog post read from the content directory
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// File name without its extension; lookup key and URL segment
    pub slug: String,

    /// Raw Markdown body, front matter excluded
    pub body: String,

    /// Validated front matter
    pub metadata: Metadata,

    /// Estimated reading time, at least one minute
    pub reading_time_minutes: u32,

    /// File the post was read from
    #[serde(skip)]
    pub source: PathBuf,
}

impl Post {
    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn date(&self) -> &str {
        &self.metadata.date
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.metadata.categories.iter().any(|c| c == category)
    }

    /// The first `count` posts of an already ordered listing
    pub fn recent(posts: &[Post], count: usize) -> &[Post] {
        &posts[..count.min(posts.len())]
    }
}

/// Posts sharing one category, in listing order
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup<'a> {
    pub name: &'a str,
    pub posts: Vec<&'a Post>,
}

/// Distinct categories in order of first appearance
pub fn categories(posts: &[Post]) -> Vec<&str> {
    group_by_category(posts)
        .into_iter()
        .map(|group| group.name)
        .collect()
}

/// Group posts by category, keeping first-appearance order of categories
/// and listing order of posts within each group
pub fn group_by_category(posts: &[Post]) -> Vec<CategoryGroup<'_>> {
    let mut groups: IndexMap<&str, Vec<&Post>> = IndexMap::new();
    for post in posts {
        for category in &post.metadata.categories {
            let entry = groups.entry(category.as_str()).or_default();
            // A post listing the same category twice still appears once
            if !entry.iter().any(|p| p.slug == post.slug) {
                entry.push(post);
            }
        }
    }

    groups
        .into_iter()
        .map(|(name, posts)| CategoryGroup { name, posts })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, date: &str, categories: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            body: String::new(),
            metadata: Metadata {
                title: slug.to_string(),
                date: date.to_string(),
                description: String::new(),
                categories: categories.iter().map(|c| c.to_string()).collect(),
                image: None,
            },
            reading_time_minutes: 1,
            source: PathBuf::from(format!("{}.md", slug)),
        }
    }

    #[test]
    fn test_group_by_category() {
        let posts = vec![
            post("c", "2023-06-30", &["Next.js", "React", "Web Development"]),
            post("b", "2023-05-20", &["CSS", "Web Design"]),
            post("a", "2023-04-15", &["React", "Web Development", "React"]),
        ];

        let groups = group_by_category(&posts);
        let names: Vec<_> = groups.iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            ["Next.js", "React", "Web Development", "CSS", "Web Design"]
        );

        let react: Vec<_> = groups[1].posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(react, ["c", "a"]);
        assert_eq!(categories(&posts).len(), 5);
    }

    #[test]
    fn test_uncategorized_post_is_in_no_group() {
        let posts = vec![post("lonely", "2024-01-01", &[])];
        assert!(group_by_category(&posts).is_empty());
        assert!(!posts[0].has_category("Test"));
    }

    #[test]
    fn test_recent() {
        let posts = vec![
            post("c", "2023-06-30", &[]),
            post("b", "2023-05-20", &[]),
        ];
        assert_eq!(Post::recent(&posts, 3).len(), 2);
        assert_eq!(Post::recent(&posts, 1)[0].slug, "c");
    }
}
