//! URL utilities for resolving site-relative paths against the repository.

use url::Url;

use crate::error::{ConvertError, Result};

/// Validate a repository base URL and strip any trailing slash.
///
/// Only absolute `http`/`https` URLs are accepted. The trailing slash is
/// removed so that joining a site-relative path (which always starts with
/// `/`) never yields a double slash.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidBaseUrl`] when the URL does not parse or
/// uses another scheme.
pub fn normalize_base_url(base_url: &str) -> Result<String> {
    let trimmed = base_url.trim();
    match Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => {
            Ok(trimmed.trim_end_matches('/').to_string())
        }
        _ => Err(ConvertError::InvalidBaseUrl(base_url.to_string())),
    }
}

/// Prefix a site-relative path (`/docs/x`) with the repository base URL.
///
/// Plain string concatenation, not RFC 3986 resolution: the base carries a
/// path (`/blob/<branch>`) that a root-relative join would discard.
#[must_use]
pub fn resolve_site_path(base_url: &str, path: &str) -> String {
    let mut resolved = String::with_capacity(base_url.len() + path.len());
    resolved.push_str(base_url);
    resolved.push_str(path);
    resolved
}
