//! Date helper functions

use chrono::NaiveDate;

/// Format an ISO-8601 date for display, e.g. `2023-04-15` -> `April 15, 2023`
///
/// Only the leading `YYYY-MM-DD` is used; anything unparseable is returned
/// unchanged.
pub fn format_date(iso: &str) -> String {
    iso.get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| iso.to_string())
}

/// Today's date in the local timezone as `YYYY-MM-DD`
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Generate a `<time>` HTML element
pub fn time_tag(iso: &str) -> String {
    format!(
        r#"<time datetime="{}">{}</time>"#,
        super::escape_html(iso),
        super::escape_html(&format_date(iso))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2023-04-15"), "April 15, 2023");
        assert_eq!(format_date("2024-01-01T08:30:00Z"), "January 1, 2024");
        assert_eq!(format_date("someday"), "someday");
    }

    #[test]
    fn test_time_tag() {
        assert_eq!(
            time_tag("2023-06-30"),
            r#"<time datetime="2023-06-30">June 30, 2023</time>"#
        );
    }

    #[test]
    fn test_today_shape() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
