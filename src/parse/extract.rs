//! URL extraction from free text.
//!
//! A best-effort scanner, not a URL parser: it finds the leftmost substring that
//! looks like an HTTP(S) link so it can be probed and later spliced out.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Scheme, optional `www.`, dotted host, optional port, then path/query/fragment.
///
/// Word characters are ASCII only; internationalized hosts are not matched.
/// A bracketed IPv6 host (`http://[::1]:8080/`) never matches either.
const URL_PATTERN: &str =
    r"(?i)https?://(?:www\.)?[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)+(?::[0-9]{1,5})?[/#?&=A-Za-z0-9_-]*";

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is a compile-time constant covered by tests
    Regex::new(URL_PATTERN).expect("URL_PATTERN is a valid regex")
});

/// Returns the byte range of the leftmost URL in `text`, if any.
pub fn find_url(text: &str) -> Option<Range<usize>> {
    URL_REGEX.find(text).map(|m| m.range())
}

/// Returns the leftmost URL-shaped substring of `text`.
///
/// # Examples
///
/// ```
/// use url_expander::extract_url;
///
/// assert_eq!(
///     extract_url("read this https://bit.ly/3abc?ref=x later"),
///     Some("https://bit.ly/3abc?ref=x")
/// );
/// assert_eq!(extract_url("nothing to see"), None);
/// ```
pub fn extract_url(text: &str) -> Option<&str> {
    find_url(text).map(|range| &text[range])
}

/// Rewrites every `http://` in `text` to `https://`.
///
/// Matching is case-sensitive and covers the whole text, not only the URL.
pub fn upgrade_scheme(text: &str) -> String {
    text.replace("http://", "https://")
}

/// Picks the URL to hand to a browser from a result text.
///
/// The text is upgraded to `https://` first, so the browser is always
/// pointed at the secure variant.
pub fn browser_target(text: &str) -> Option<String> {
    extract_url(&upgrade_scheme(text)).map(str::to_string)
}
