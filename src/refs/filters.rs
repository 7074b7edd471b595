use regex::Regex;

fn url_scheme_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*:").expect("invalid URL scheme regex")
    })
}

fn action_scheme_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^mailto:").expect("invalid mailto regex"),
                Regex::new(r"(?i)^tel:").expect("invalid tel regex"),
                Regex::new(r"(?i)^javascript:").expect("invalid javascript regex"),
            ]
        })
        .as_slice()
}

/// Extract the checkable path component of a raw `src`/`href` value.
///
/// Returns `None` for references that cannot name a file in the project's own
/// filesystem: URLs carrying a scheme, in-page anchors, action links such as
/// `mailto:`, network-path references (`//host/...`), and values whose path
/// component is empty once the query string and fragment are stripped.
/// Surrounding whitespace is ignored before classification.
pub fn normalize_reference(raw: &str) -> Option<String> {
    let value = raw.trim();
    if url_scheme_pattern().is_match(value) {
        return None;
    }
    if value.starts_with('#') {
        return None;
    }
    if action_scheme_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
    {
        return None;
    }
    if value.starts_with("//") {
        return None;
    }

    let path = value.split('#').next().unwrap_or(value);
    let path = path.split('?').next().unwrap_or(path);
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    Some(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::normalize_reference;

    #[test]
    fn rejects_scheme_urls() {
        assert_eq!(normalize_reference("http://x/y"), None);
        assert_eq!(normalize_reference("https://example.com/app.js"), None);
        assert_eq!(normalize_reference("HTTPS://EXAMPLE.COM"), None);
        assert_eq!(normalize_reference("data:image/png;base64,abc"), None);
        assert_eq!(normalize_reference("  http://padded.example.com"), None);
    }

    #[test]
    fn rejects_in_page_anchors() {
        assert_eq!(normalize_reference("#section"), None);
        assert_eq!(normalize_reference("#"), None);
    }

    #[test]
    fn rejects_action_links() {
        assert_eq!(normalize_reference("mailto:a@b.com"), None);
        assert_eq!(normalize_reference("tel:123"), None);
        assert_eq!(normalize_reference("javascript:void(0)"), None);
    }

    #[test]
    fn rejects_network_path_references() {
        assert_eq!(normalize_reference("//cdn.example.com/lib.js"), None);
    }

    #[test]
    fn keeps_root_relative_paths_unchanged() {
        assert_eq!(
            normalize_reference("/assets/app.js").as_deref(),
            Some("/assets/app.js")
        );
    }

    #[test]
    fn strips_query_strings_and_fragments() {
        assert_eq!(
            normalize_reference("./img/logo.png?v=2").as_deref(),
            Some("./img/logo.png")
        );
        assert_eq!(
            normalize_reference("img/logo.png#detail").as_deref(),
            Some("img/logo.png")
        );
        assert_eq!(
            normalize_reference("styles.css?v=3#print").as_deref(),
            Some("styles.css")
        );
    }

    #[test]
    fn rejects_values_with_an_empty_path() {
        assert_eq!(normalize_reference("   "), None);
        assert_eq!(normalize_reference("?v=2"), None);
        assert_eq!(normalize_reference("#top?ignored"), None);
    }

    #[test]
    fn keeps_paths_with_late_colons() {
        assert_eq!(
            normalize_reference("files/report:final.pdf").as_deref(),
            Some("files/report:final.pdf")
        );
    }
}
