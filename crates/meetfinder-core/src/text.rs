//! Text utilities for display and export.
//!
//! Descriptions from the remote source may contain HTML markup. Stripping is
//! done with a literal tag pattern (any `<...>` substring is deleted), not a
//! full parser; this matches the presentation behavior the rest of the
//! pipeline expects and is an accepted approximation.

use std::sync::LazyLock;

use regex::Regex;

/// Regex matching HTML-tag-shaped substrings.
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

/// Removes every `<...>` substring from the text.
///
/// # Example
///
/// ```
/// use meetfinder_core::text::strip_tags;
///
/// assert_eq!(strip_tags("<b>Free</b> food!"), "Free food!");
/// ```
pub fn strip_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").into_owned()
}

/// Truncates text to `max_chars` characters, appending `...` when truncated.
///
/// Counting is by Unicode scalar value, so multi-byte characters are never
/// split.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let mut truncated: String = text.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod stripping {
        use super::*;

        #[test]
        fn removes_simple_tags() {
            assert_eq!(strip_tags("<b>Free</b> food!"), "Free food!");
        }

        #[test]
        fn removes_tags_with_attributes() {
            assert_eq!(
                strip_tags(r#"<p class="lead">Hello</p> <a href="x">link</a>"#),
                "Hello link"
            );
        }

        #[test]
        fn leaves_plain_text_alone() {
            assert_eq!(strip_tags("no markup here"), "no markup here");
        }

        #[test]
        fn handles_unclosed_angle_bracket() {
            // An unterminated "<" never matches the pattern and survives.
            assert_eq!(strip_tags("a < b"), "a < b");
        }

        #[test]
        fn empty_input() {
            assert_eq!(strip_tags(""), "");
        }
    }

    mod truncation {
        use super::*;

        #[test]
        fn below_limit_is_unchanged() {
            assert_eq!(truncate("short", 100), "short");
        }

        #[test]
        fn at_limit_is_unchanged() {
            let text = "x".repeat(100);
            assert_eq!(truncate(&text, 100), text);
        }

        #[test]
        fn over_limit_gets_ellipsis() {
            let text = "y".repeat(150);
            let out = truncate(&text, 100);
            assert_eq!(out.len(), 103);
            assert!(out.ends_with("..."));
            assert_eq!(&out[..100], "y".repeat(100));
        }

        #[test]
        fn counts_characters_not_bytes() {
            let text = "é".repeat(5);
            assert_eq!(truncate(&text, 3), format!("{}...", "é".repeat(3)));
        }
    }
}
