//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped in a single path segment or fragment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog/") // -> "/site/blog/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// URL of the blog listing page
pub fn blog_url(config: &SiteConfig) -> String {
    url_for(config, "blog/")
}

/// URL of a post's detail page
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &format!("blog/{}/", encode_segment(slug)))
}

/// Fragment id of a category section on the listing page
pub fn category_anchor(category: &str) -> String {
    format!("category-{}", encode_segment(category))
}

/// Percent-encode a single path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com".to_string();
        config.root = "/site/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/site/css/style.css");
        assert_eq!(url_for(&config, ""), "/site/");
        assert_eq!(url_for(&SiteConfig::default(), "blog/"), "/blog/");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/blog/"),
            "https://example.com/site/blog/"
        );
    }

    #[test]
    fn test_post_url() {
        let config = test_config();
        assert_eq!(post_url(&config, "hello-world"), "/site/blog/hello-world/");
    }

    #[test]
    fn test_category_anchor() {
        assert_eq!(category_anchor("Web Development"), "category-Web%20Development");
        assert_eq!(category_anchor("Next.js"), "category-Next.js");
    }
}
