//! Parsing of paragraph markup into styled runs.

use crate::markdown::{MONO_CLOSE, MONO_OPEN};

/// A run of text in one face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Unescaped text
    pub text: String,
    /// Whether the run uses the monospace face
    pub mono: bool,
}

impl Span {
    /// Create a span.
    pub fn new(text: impl Into<String>, mono: bool) -> Self {
        Self {
            text: text.into(),
            mono,
        }
    }
}

const ENTITIES: [(&str, char); 3] = [("&amp;", '&'), ("&lt;", '<'), ("&gt;", '>')];

/// Split markup into runs, decoding entities.
///
/// Unknown tags and stray `&` are kept as literal text.
pub fn parse_markup(markup: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut current = String::new();
    let mut mono = false;
    let mut rest = markup;

    while let Some(c) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix(MONO_OPEN) {
            push_run(&mut spans, &mut current, mono);
            mono = true;
            rest = after;
            continue;
        }
        if let Some(after) = rest.strip_prefix(MONO_CLOSE) {
            push_run(&mut spans, &mut current, mono);
            mono = false;
            rest = after;
            continue;
        }
        if c == '&' {
            if let Some((entity, decoded)) = ENTITIES.iter().find(|(e, _)| rest.starts_with(e)) {
                current.push(*decoded);
                rest = &rest[entity.len()..];
                continue;
            }
        }
        current.push(c);
        rest = &rest[c.len_utf8()..];
    }
    push_run(&mut spans, &mut current, mono);
    spans
}

/// Plain text of markup, with tags removed and entities decoded.
pub fn markup_text(markup: &str) -> String {
    parse_markup(markup)
        .into_iter()
        .map(|s| s.text)
        .collect()
}

fn push_run(spans: &mut Vec<Span>, current: &mut String, mono: bool) {
    if current.is_empty() {
        return;
    }
    let text = std::mem::take(current);
    match spans.last_mut() {
        Some(last) if last.mono == mono => last.text.push_str(&text),
        _ => spans.push(Span::new(text, mono)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_markup("hello"), vec![Span::new("hello", false)]);
        assert!(parse_markup("").is_empty());
    }

    #[test]
    fn test_mono_runs() {
        let spans = parse_markup("Some <font face=\"Courier\">code</font> here");
        assert_eq!(
            spans,
            vec![
                Span::new("Some ", false),
                Span::new("code", true),
                Span::new(" here", false),
            ]
        );
    }

    #[test]
    fn test_entities_decoded() {
        let spans = parse_markup("a &amp; b <font face=\"Courier\">x &lt; y</font>");
        assert_eq!(
            spans,
            vec![Span::new("a & b ", false), Span::new("x < y", true)]
        );
        assert_eq!(markup_text("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_stray_ampersand_literal() {
        assert_eq!(markup_text("fish & chips &nbsp;"), "fish & chips &nbsp;");
    }

    #[test]
    fn test_unicode() {
        assert_eq!(markup_text("naïve — café"), "naïve — café");
    }
}
