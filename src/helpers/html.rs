//! HTML helper functions

/// Escape text for use in HTML content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an anchor tag; `text` is escaped, `href` is used as given
pub fn link_to(href: &str, text: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, escape_html(href), escape_html(text))
}

/// Render categories as badge spans
pub fn badges(categories: &[String]) -> String {
    categories
        .iter()
        .map(|c| format!(r#"<span class="badge">{}</span>"#, escape_html(c)))
        .collect::<Vec<_>>()
        .join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_link_to() {
        assert_eq!(link_to("/blog/", "Blog"), r#"<a href="/blog/">Blog</a>"#);
    }

    #[test]
    fn test_badges() {
        let cats = vec!["React".to_string(), "<CSS>".to_string()];
        assert_eq!(
            badges(&cats),
            r#"<span class="badge">React</span><span class="badge">&lt;CSS&gt;</span>"#
        );
    }
}
