//! Built-in HTML pages for the blog
//!
//! Pages are assembled from small string builders; every value taken from
//! content or configuration is escaped before it reaches the markup.

use crate::config::SiteConfig;
use crate::content::{group_by_category, MarkdownRenderer, Post};
use crate::helpers::{
    badges, blog_url, category_anchor, encode_segment, escape_html, full_url_for, link_to,
    post_url, time_tag, url_for,
};

/// Title of the page served for unknown slugs
pub const NOT_FOUND_TITLE: &str = "Blog Post Not Found";

/// Renders blog pages for one site configuration
pub struct TemplateRenderer {
    config: SiteConfig,
    markdown: MarkdownRenderer,
}

impl TemplateRenderer {
    pub fn new(config: SiteConfig) -> Self {
        let markdown = MarkdownRenderer::with_options(&config.highlight_theme, config.line_numbers);
        Self { config, markdown }
    }

    /// Listing page: every post, then one section per category
    pub fn blog_index(&self, posts: &[Post]) -> String {
        let groups = group_by_category(posts);

        let mut nav = String::from(r##"<nav class="tabs"><a href="#all">All Posts</a>"##);
        for group in &groups {
            nav.push_str(&format!(
                r##"<a href="#{}">{}</a>"##,
                category_anchor(group.name),
                escape_html(group.name)
            ));
        }
        nav.push_str("</nav>\n");

        let mut body = format!(
            "<header><h1>{}</h1><p>{}</p></header>\n{}",
            escape_html(&self.config.title),
            escape_html(&self.config.description),
            nav
        );

        let all: Vec<&Post> = posts.iter().collect();
        body.push_str(&self.section("all", "All Posts", &all));
        for group in &groups {
            body.push_str(&self.section(&category_anchor(group.name), group.name, &group.posts));
        }

        let title = format!("{} | {}", self.config.title, self.config.author);
        let canonical = full_url_for(&self.config, "blog/");
        self.layout(&title, &self.config.description, Some(&canonical), &body)
    }

    /// Detail page for one post
    pub fn post_page(&self, post: &Post) -> String {
        let meta = &post.metadata;

        let mut body = format!(
            r#"<p class="back">{}</p>
<article class="post">
<div class="categories">{}</div>
<h1>{}</h1>
<p class="meta">{} <span class="reading-time">{} min read</span></p>
"#,
            link_to(&blog_url(&self.config), "Back to all posts"),
            badges(&meta.categories),
            escape_html(&meta.title),
            time_tag(&meta.date),
            post.reading_time_minutes
        );

        if let Some(image) = &meta.image {
            body.push_str(&format!(
                r#"<img class="cover" src="{}" alt="{}">
"#,
                escape_html(image),
                escape_html(&meta.title)
            ));
        }

        body.push_str(r#"<div class="content">"#);
        body.push_str(&self.markdown.render(&post.body));
        body.push_str("</div>\n</article>\n");

        let title = format!("{} | {}", meta.title, self.config.author);
        let canonical = full_url_for(
            &self.config,
            &format!("blog/{}/", encode_segment(&post.slug)),
        );
        self.layout(&title, &meta.description, Some(&canonical), &body)
    }

    /// Page shown when a slug has no post
    pub fn not_found(&self) -> String {
        let body = format!(
            "<h1>{}</h1>\n<p>{}</p>\n",
            NOT_FOUND_TITLE,
            link_to(&blog_url(&self.config), "Back to all posts")
        );
        self.layout(NOT_FOUND_TITLE, "", None, &body)
    }

    /// Generic failure page; details stay in the logs
    pub fn error_page(&self) -> String {
        self.layout(
            "Something went wrong",
            "",
            None,
            "<h1>Something went wrong</h1>\n<p>Please try again later.</p>\n",
        )
    }

    fn section(&self, id: &str, heading: &str, posts: &[&Post]) -> String {
        let mut out = format!(
            "<section id=\"{}\">\n<h2>{}</h2>\n<div class=\"cards\">\n",
            escape_html(id),
            escape_html(heading)
        );
        for post in posts {
            out.push_str(&self.card(post));
        }
        out.push_str("</div>\n</section>\n");
        out
    }

    fn card(&self, post: &Post) -> String {
        let meta = &post.metadata;
        format!(
            r#"<a class="card" href="{}">
<div class="categories">{}</div>
<h3>{}</h3>
<p>{}</p>
<footer>{} <span class="reading-time">{} min read</span></footer>
</a>
"#,
            escape_html(&post_url(&self.config, &post.slug)),
            badges(&meta.categories),
            escape_html(&meta.title),
            escape_html(&meta.description),
            time_tag(&meta.date),
            post.reading_time_minutes
        )
    }

    fn layout(&self, title: &str, description: &str, canonical: Option<&str>, body: &str) -> String {
        let canonical = canonical
            .map(|href| format!("<link rel=\"canonical\" href=\"{}\">\n", escape_html(href)))
            .unwrap_or_default();
        format!(
            r#"<!DOCTYPE html>
<html lang="{}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
<meta name="description" content="{}">
{}</head>
<body>
<main>
{}</main>
<footer class="site-footer">{}</footer>
</body>
</html>
"#,
            escape_html(&self.config.language),
            escape_html(title),
            escape_html(description),
            canonical,
            body,
            link_to(&url_for(&self.config, ""), &self.config.author)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Metadata;
    use std::path::PathBuf;

    fn post(slug: &str, title: &str, categories: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            body: "# Heading\n\nSome *text*.".to_string(),
            metadata: Metadata {
                title: title.to_string(),
                date: "2023-04-15".to_string(),
                description: "desc".to_string(),
                categories: categories.iter().map(|c| c.to_string()).collect(),
                image: None,
            },
            reading_time_minutes: 4,
            source: PathBuf::new(),
        }
    }

    fn renderer() -> TemplateRenderer {
        let mut config = SiteConfig::default();
        config.author = "Jane Doe".to_string();
        TemplateRenderer::new(config)
    }

    #[test]
    fn test_blog_index_groups_categories() {
        let posts = vec![
            post("a", "First", &["React", "Web Development"]),
            post("b", "Second", &["CSS"]),
        ];
        let html = renderer().blog_index(&posts);
        assert!(html.contains("<title>Blog | Jane Doe</title>"));
        assert!(html.contains(r##"<a href="#all">All Posts</a>"##));
        assert!(html.contains(r#"<section id="category-Web%20Development">"#));
        assert!(html.contains(r#"href="/blog/a/""#));
        assert!(html.contains("April 15, 2023"));
        assert!(html.contains("4 min read"));
        assert_eq!(html.matches(r#"href="/blog/b/""#).count(), 2);
    }

    #[test]
    fn test_post_page() {
        let mut p = post("a", "Tom & Jerry", &["Fun"]);
        p.metadata.image = Some("/cover.png".to_string());
        let html = renderer().post_page(&p);
        assert!(html.contains("<title>Tom &amp; Jerry | Jane Doe</title>"));
        assert!(html.contains("<em>text</em>"));
        assert!(html.contains(r#"src="/cover.png""#));
        assert!(html.contains("Back to all posts"));
        assert!(html.contains(r#"<link rel="canonical" href="http://localhost:4000/blog/a/">"#));
    }

    #[test]
    fn test_not_found() {
        let html = renderer().not_found();
        assert!(html.contains("<title>Blog Post Not Found</title>"));
    }
}
