//! Escaping and inline code spans.

use regex::Regex;
use std::sync::OnceLock;

/// Opening tag wrapped around inline code.
pub const MONO_OPEN: &str = "<font face=\"Courier\">";

/// Closing tag for inline code.
pub const MONO_CLOSE: &str = "</font>";

fn inline_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`([^`]+)`").unwrap())
}

/// Escape HTML-special characters.
///
/// `&` is replaced first so existing entities are not left ambiguous.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Wrap inline code spans of already-escaped text in the monospace tag.
///
/// Escaping leaves backticks untouched, so spans are matched on the escaped
/// text and their content is carried over without escaping it twice.
pub fn format_inline(escaped: &str) -> String {
    inline_code_regex()
        .replace_all(escaped, |caps: &regex::Captures| {
            format!("{}{}{}", MONO_OPEN, &caps[1], MONO_CLOSE)
        })
        .into_owned()
}

/// Escape then render inline code: the full pipeline for non-code text.
pub(crate) fn to_markup(text: &str) -> String {
    format_inline(&escape(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & b < c > d"), "a &amp; b &lt; c &gt; d");
        assert_eq!(escape("&lt;"), "&amp;lt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_escaped_markup_decodes_to_source() {
        let raw = "x<y && y>z &amp;";
        assert_eq!(crate::render::markup_text(&escape(raw)), raw);
    }

    #[test]
    fn test_format_inline() {
        assert_eq!(
            format_inline("Some `code` here"),
            "Some <font face=\"Courier\">code</font> here"
        );
        assert_eq!(
            format_inline("`a` and `b`"),
            "<font face=\"Courier\">a</font> and <font face=\"Courier\">b</font>"
        );
    }

    #[test]
    fn test_format_inline_unmatched_backtick() {
        assert_eq!(format_inline("a ` b"), "a ` b");
        assert_eq!(format_inline("empty `` span"), "empty `` span");
    }

    #[test]
    fn test_to_markup_escapes_code_once() {
        assert_eq!(
            to_markup("if `a < b && c` then"),
            "if <font face=\"Courier\">a &lt; b &amp;&amp; c</font> then"
        );
    }
}
