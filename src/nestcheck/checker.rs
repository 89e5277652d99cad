//! Nesting checker
//!
//! Walks lines in order, tokenizes each one and keeps a stack of open tags.
//!
//! ## Rules
//!
//! - Self-closing tags and void elements never touch the stack.
//! - A closing tag with an empty stack aborts the whole scan.
//! - A closing tag whose name differs from the popped frame is recorded as a
//!   mismatch and the scan carries on.
//! - Whatever is left on the stack at the end is reported innermost first.

use crate::nestcheck::report::{Mismatch, OpenTagFrame, Outcome, Report};
use crate::nestcheck::tag::{split_lines, tokenize_line, TagKind, TagToken};
use std::collections::HashSet;

/// Elements that never need a closing counterpart
pub const DEFAULT_VOID_ELEMENTS: &[&str] = &["img", "br", "input", "hr", "link", "meta"];

/// Checks tag nesting for one input at a time
#[derive(Debug, Clone)]
pub struct NestingChecker {
    /// Lowercased void element names
    void_elements: HashSet<String>,
}

impl NestingChecker {
    /// Create a checker with the default void element list
    pub fn new() -> Self {
        Self::with_void_elements(DEFAULT_VOID_ELEMENTS.iter().copied())
    }

    /// Create a checker with a custom void element list.
    ///
    /// Names are compared case-insensitively.
    pub fn with_void_elements<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let void_elements = names
            .into_iter()
            .map(|name| name.as_ref().to_ascii_lowercase())
            .collect();
        Self { void_elements }
    }

    /// Whether `name` is a void element (case-insensitive)
    pub fn is_void(&self, name: &str) -> bool {
        self.void_elements.contains(&name.to_ascii_lowercase())
    }

    /// Void element names, sorted
    pub fn void_elements(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.void_elements.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Decide how a token affects the stack
    pub fn classify(&self, token: &TagToken<'_>) -> TagKind {
        if token.is_self_closing {
            TagKind::SelfClosing
        } else if self.is_void(token.name) {
            TagKind::Void
        } else if token.is_closing {
            TagKind::Closing
        } else {
            TagKind::Opening
        }
    }

    /// Scan `lines` (line 1 first) and report the nesting structure
    pub fn check<I, S>(&self, lines: I) -> Report
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stack: Vec<OpenTagFrame> = Vec::new();
        let mut mismatches = Vec::new();

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            for token in tokenize_line(line.as_ref()) {
                let kind = self.classify(&token);
                if !kind.touches_stack() {
                    tracing::trace!(tag = token.name, line = line_number, "skipping tag");
                    continue;
                }
                if kind == TagKind::Opening {
                    tracing::debug!(tag = token.name, line = line_number, "open");
                    stack.push(OpenTagFrame::new(token.name, line_number));
                    continue;
                }

                let Some(open) = stack.pop() else {
                    tracing::debug!(
                        tag = token.name,
                        line = line_number,
                        "closing tag with empty stack, stopping scan"
                    );
                    return Report {
                        mismatches,
                        outcome: Outcome::Aborted {
                            tag: token.name.to_string(),
                            line: line_number,
                        },
                    };
                };
                tracing::debug!(tag = token.name, line = line_number, "close");
                if open.name != token.name {
                    mismatches.push(Mismatch {
                        found: token.name.to_string(),
                        line: line_number,
                        expected: open.name,
                        expected_line: open.line,
                    });
                }
            }
        }

        let outcome = if stack.is_empty() {
            Outcome::Balanced
        } else {
            stack.reverse();
            Outcome::Unclosed { tags: stack }
        };
        Report {
            mismatches,
            outcome,
        }
    }

    /// Scan a whole source string, split on `\r\n`, `\r` or `\n`
    pub fn check_source(&self, source: &str) -> Report {
        self.check(split_lines(source))
    }
}

impl Default for NestingChecker {
    fn default() -> Self {
        Self::new()
    }
}
