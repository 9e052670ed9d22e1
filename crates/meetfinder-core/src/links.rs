//! Meeting-link extraction for online events.
//!
//! Scans free-form text (event descriptions) for URL-shaped substrings and
//! picks the first one hosted by a known video-conferencing provider. Used by
//! the CSV exporter to populate the `meetingLink` column.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Regex for extracting URLs from text.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"'\)\]]+"#).expect("Invalid URL regex"));

/// Domain fragments identifying known meeting hosts.
const MEETING_DOMAINS: [&str; 5] = [
    "zoom.us",
    "meet.google",
    "teams.microsoft",
    "webex",
    "gotomeeting",
];

/// Returns the first URL in `text` hosted by a known meeting provider.
///
/// Candidates that do not parse as URLs are skipped. Returns `None` when the
/// text contains no matching URL.
///
/// # Example
///
/// ```
/// use meetfinder_core::links::extract_meeting_link;
///
/// let text = "Join at https://zoom.us/j/123 now";
/// assert_eq!(
///     extract_meeting_link(text).as_deref(),
///     Some("https://zoom.us/j/123")
/// );
/// assert_eq!(extract_meeting_link("see https://example.com/about"), None);
/// ```
pub fn extract_meeting_link(text: &str) -> Option<String> {
    URL_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|candidate| Url::parse(candidate).is_ok())
        .find(|candidate| MEETING_DOMAINS.iter().any(|d| candidate.contains(d)))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_zoom_link() {
        let text = "Join at https://zoom.us/j/123 now";
        assert_eq!(
            extract_meeting_link(text).as_deref(),
            Some("https://zoom.us/j/123")
        );
    }

    #[test]
    fn finds_link_inside_markup() {
        // The URL regex stops at "<", so markup never leaks into the link.
        let text = "<p>Call: https://meet.google.com/abc-defg-hij</p>";
        assert_eq!(
            extract_meeting_link(text).as_deref(),
            Some("https://meet.google.com/abc-defg-hij")
        );
    }

    #[test]
    fn first_meeting_url_wins() {
        let text = "https://teams.microsoft.com/l/one then https://zoom.us/j/2";
        assert_eq!(
            extract_meeting_link(text).as_deref(),
            Some("https://teams.microsoft.com/l/one")
        );
    }

    #[test]
    fn skips_non_meeting_urls() {
        let text = "Agenda: https://example.com/agenda then https://company.webex.com/join/x";
        assert_eq!(
            extract_meeting_link(text).as_deref(),
            Some("https://company.webex.com/join/x")
        );
    }

    #[test]
    fn none_when_no_urls() {
        assert_eq!(extract_meeting_link("no links here"), None);
    }

    #[test]
    fn none_when_only_unrelated_urls() {
        assert_eq!(
            extract_meeting_link("https://example.com and https://rust-lang.org"),
            None
        );
    }

    #[test]
    fn detects_gotomeeting() {
        let text = "dial in via https://global.gotomeeting.com/join/555";
        assert_eq!(
            extract_meeting_link(text).as_deref(),
            Some("https://global.gotomeeting.com/join/555")
        );
    }
}
