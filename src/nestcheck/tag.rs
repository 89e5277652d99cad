//! Tag tokenizer
//!
//! Finds tag-like substrings in a single line of text. Matching is regex based
//! and deliberately approximate: it has no notion of comments, string literals
//! or tags that span several lines.
//!
//! ## Pattern
//!
//! ```text
//! <  /?  NAME  ( WS ATTRIBUTES )?  /?  >
//!        [A-Za-z0-9.]+   anything but '>'
//! ```
//!
//! The attribute part is matched lazily so a trailing `/` before `>` is seen
//! as the self-closing marker rather than as attribute text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Lazy-compiled regex for a single tag-like substring
static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(?P<closing>/?)(?P<name>[a-zA-Z0-9.]+)(?:\s[^>]*?)?(?P<self_closing>/?)>")
        .unwrap()
});

/// Line terminators: CRLF, lone CR and LF all end a line
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// One tag-like match within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken<'a> {
    /// Identifier as written (case preserved)
    pub name: &'a str,
    /// Written as `</name ...>`
    pub is_closing: bool,
    /// Written as `<name .../>`
    pub is_self_closing: bool,
    /// Byte range of the whole match within the line
    pub span: Range<usize>,
}

/// How a token affects the scan stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Opening,
    Closing,
    SelfClosing,
    Void,
}

impl TagKind {
    /// Whether tokens of this kind are pushed or popped at all
    pub fn touches_stack(self) -> bool {
        matches!(self, TagKind::Opening | TagKind::Closing)
    }
}

/// Split text into lines on `\r\n`, `\r` or `\n`.
///
/// A terminator at the very end does not start an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Tokenize one line, yielding matches left to right.
///
/// Each search resumes after the end of the previous match, so matches never
/// overlap.
pub fn tokenize_line(line: &str) -> impl Iterator<Item = TagToken<'_>> + '_ {
    TAG_PATTERN.captures_iter(line).filter_map(|caps| {
        let whole = caps.get(0)?;
        let name = caps.name("name")?.as_str();
        Some(TagToken {
            name,
            is_closing: caps.name("closing").is_some_and(|m| !m.is_empty()),
            is_self_closing: caps.name("self_closing").is_some_and(|m| !m.is_empty()),
            span: whole.range(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(line: &str) -> Vec<&str> {
        tokenize_line(line).map(|t| t.name).collect()
    }

    #[test]
    fn test_opening_and_closing() {
        let tokens: Vec<_> = tokenize_line("<div></div>").collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].name, "div");
        assert!(!tokens[0].is_closing);
        assert_eq!(tokens[0].span, 0..5);
        assert_eq!(tokens[1].name, "div");
        assert!(tokens[1].is_closing);
        assert_eq!(tokens[1].span, 5..11);
    }

    #[test]
    fn test_self_closing_without_attributes() {
        let token = tokenize_line("<br/>").next().unwrap();
        assert!(token.is_self_closing);
        assert!(!token.is_closing);
    }

    #[test]
    fn test_self_closing_with_attributes() {
        let token = tokenize_line(r#"<Icon size={12} name="x" />"#).next().unwrap();
        assert_eq!(token.name, "Icon");
        assert!(token.is_self_closing);
    }

    #[test]
    fn test_attributes_are_skipped() {
        let token = tokenize_line(r#"<div className="card" id='a'>"#)
            .next()
            .unwrap();
        assert_eq!(token.name, "div");
        assert!(!token.is_self_closing);
    }

    #[test]
    fn test_dotted_names() {
        assert_eq!(names("<Foo.Bar><Foo.Bar.Baz/>"), vec!["Foo.Bar", "Foo.Bar.Baz"]);
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(names("<Layout></layout>"), vec!["Layout", "layout"]);
    }

    #[test]
    fn test_fragments_do_not_match() {
        assert!(names("<></>").is_empty());
    }

    #[test]
    fn test_comparisons_do_not_match() {
        assert!(names("if (a < b && c > d) {}").is_empty());
    }

    #[test]
    fn test_name_must_be_followed_by_whitespace_or_end() {
        // `<a-b>` is not a tag: '-' is neither part of a name nor whitespace
        assert!(names("<a-b>").is_empty());
    }

    #[test]
    fn test_tag_split_across_lines_is_not_a_tag() {
        assert!(names("<div").is_empty());
        assert!(names("  className=\"x\">").is_empty());
    }

    #[test]
    fn test_multiple_tags_left_to_right() {
        assert_eq!(
            names("<ul><li>one</li><li>two</li></ul>"),
            vec!["ul", "li", "li", "li", "li", "ul"]
        );
    }

    #[test]
    fn test_split_lines_mixed_terminators() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("<div>\r<p>\r"), vec!["<div>", "<p>"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_tag_kind_touches_stack() {
        assert!(TagKind::Opening.touches_stack());
        assert!(TagKind::Closing.touches_stack());
        assert!(!TagKind::SelfClosing.touches_stack());
        assert!(!TagKind::Void.touches_stack());
    }
}
