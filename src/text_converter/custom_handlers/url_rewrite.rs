//! Link and image target rewriting for the plain-text README.

use crate::utils::resolve_site_path;

/// Replacement text for in-page `#fragment` links
pub const IN_PAGE_LINK_TEXT: &str = "see below";

/// Resolve an anchor `href`.
///
/// Returns `None` when the target should not be shown at all
/// (build artefacts under `/dist`).
///
/// 1. a `mailto:` prefix is stripped
/// 2. `/dist…` is dropped
/// 3. other site-relative paths get the repository base URL
/// 4. `#fragment` becomes [`IN_PAGE_LINK_TEXT`]
/// 5. anything else is kept as-is
#[must_use]
pub fn resolve_href(href: &str, base_url: &str) -> Option<String> {
    let href = href.strip_prefix("mailto:").unwrap_or(href);

    if href.starts_with("/dist") {
        None
    } else if href.starts_with('/') {
        Some(resolve_site_path(base_url, href))
    } else if href.starts_with('#') {
        Some(IN_PAGE_LINK_TEXT.to_string())
    } else {
        Some(href.to_string())
    }
}

/// Resolve an image `src`: only site-relative paths are rewritten.
#[must_use]
pub fn resolve_src(src: &str, base_url: &str) -> String {
    if src.starts_with('/') {
        resolve_site_path(base_url, src)
    } else {
        src.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://github.com/org/repo/blob/main";

    #[test]
    fn test_mailto_prefix_stripped() {
        assert_eq!(
            resolve_href("mailto:a@b.com", BASE).as_deref(),
            Some("a@b.com")
        );
    }

    #[test]
    fn test_dist_paths_dropped() {
        assert_eq!(resolve_href("/dist/foo.zip", BASE), None);
        assert_eq!(resolve_href("/distribution", BASE), None);
    }

    #[test]
    fn test_site_relative_gets_base() {
        assert_eq!(
            resolve_href("/docs/x", BASE).as_deref(),
            Some("https://github.com/org/repo/blob/main/docs/x")
        );
    }

    #[test]
    fn test_fragment_becomes_see_below() {
        assert_eq!(resolve_href("#section", BASE).as_deref(), Some("see below"));
    }

    #[test]
    fn test_external_and_relative_unchanged() {
        assert_eq!(
            resolve_href("https://example.com/a", BASE).as_deref(),
            Some("https://example.com/a")
        );
        assert_eq!(resolve_href("docs/x.md", BASE).as_deref(), Some("docs/x.md"));
    }

    #[test]
    fn test_resolve_src() {
        assert_eq!(
            resolve_src("/img/a.png", BASE),
            "https://github.com/org/repo/blob/main/img/a.png"
        );
        assert_eq!(resolve_src("https://ext/img.png", BASE), "https://ext/img.png");
    }
}
