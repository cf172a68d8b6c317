//! List site content

use anyhow::Result;
use std::io::Write;

use crate::content::{group_by_category, Post};
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let store = folio.store();
    let posts = store.list_all()?;
    let stdout = std::io::stdout();
    write_listing(
        &mut stdout.lock(),
        &posts,
        content_type,
        folio.config.preview_count,
    )
}

/// Print one post by slug as JSON
pub fn show(folio: &Folio, slug: &str) -> Result<()> {
    match folio.store().get_by_slug(slug)? {
        Some(post) => {
            println!("{}", serde_json::to_string_pretty(&post)?);
            Ok(())
        }
        None => anyhow::bail!("Post not found: {}", slug),
    }
}

fn write_listing<W: Write>(
    out: &mut W,
    posts: &[Post],
    content_type: &str,
    preview_count: usize,
) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(
                    out,
                    "  {} - {} [{}] ({} min read)",
                    post.date(),
                    post.title(),
                    post.slug,
                    post.reading_time_minutes
                )?;
            }
        }
        "recent" => {
            for post in Post::recent(posts, preview_count) {
                writeln!(out, "  {} - {}", post.date(), post.title())?;
            }
        }
        "category" | "categories" => {
            let groups = group_by_category(posts);
            writeln!(out, "Categories ({}):", groups.len())?;
            for group in groups {
                writeln!(out, "  {} ({})", group.name, group.posts.len())?;
            }
        }
        "slug" | "slugs" => {
            for post in posts {
                writeln!(out, "{}", post.slug)?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, recent, category, slug",
                content_type
            );
        }
    }

    Ok(())
}
