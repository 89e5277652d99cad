//! Scan results
//!
//! A [`Report`] is the structured outcome of one nesting scan. Its `Display`
//! impl renders the canonical text report:
//!
//! ```text
//! Error: Mismatch closing <a> at line 3. Expected <b> from line 2
//! Unclosed tags at EOF:
//! div at line 1
//! ```

use serde::Serialize;
use std::fmt;

/// A currently-open tag kept on the scan stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenTagFrame {
    pub name: String,
    /// 1-based line where the tag was opened
    pub line: usize,
}

impl OpenTagFrame {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }
}

/// A closing tag that did not match the innermost open tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Name written in the closing tag
    pub found: String,
    pub line: usize,
    /// Name of the frame that was popped instead
    pub expected: String,
    pub expected_line: usize,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error: Mismatch closing <{}> at line {}. Expected <{}> from line {}",
            self.found, self.line, self.expected, self.expected_line
        )
    }
}

/// How the scan ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// A closing tag arrived while the stack was empty; nothing after it was scanned
    Aborted { tag: String, line: usize },
    /// Tags still open at end of input, innermost first
    Unclosed { tags: Vec<OpenTagFrame> },
    Balanced,
}

/// Structured result of one scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Mismatched closes, in scan order
    pub mismatches: Vec<Mismatch>,
    pub outcome: Outcome,
}

impl Report {
    pub fn balanced() -> Self {
        Self {
            mismatches: Vec::new(),
            outcome: Outcome::Balanced,
        }
    }

    /// True when nothing at all was reported beyond "balanced"
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.outcome == Outcome::Balanced
    }

    /// Whether the scan stopped early on an unexpected closing tag
    pub fn is_aborted(&self) -> bool {
        matches!(self.outcome, Outcome::Aborted { .. })
    }

    /// Number of individual defects (mismatches, the abort, each unclosed tag)
    pub fn defect_count(&self) -> usize {
        let outcome = match &self.outcome {
            Outcome::Aborted { .. } => 1,
            Outcome::Unclosed { tags } => tags.len(),
            Outcome::Balanced => 0,
        };
        self.mismatches.len() + outcome
    }

    /// Frames left open at end of input (empty unless the outcome is `Unclosed`)
    pub fn unclosed(&self) -> &[OpenTagFrame] {
        match &self.outcome {
            Outcome::Unclosed { tags } => tags,
            _ => &[],
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mismatch in &self.mismatches {
            writeln!(f, "{mismatch}")?;
        }
        match &self.outcome {
            Outcome::Aborted { tag, line } => {
                writeln!(f, "Error: Unexpected closing tag <{tag}> at line {line}")
            }
            Outcome::Unclosed { tags } => {
                writeln!(f, "Unclosed tags at EOF:")?;
                for frame in tags {
                    writeln!(f, "{} at line {}", frame.name, frame.line)?;
                }
                Ok(())
            }
            Outcome::Balanced => writeln!(f, "Structure seems balanced."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_display() {
        assert_eq!(Report::balanced().to_string(), "Structure seems balanced.\n");
        assert!(Report::balanced().is_clean());
        assert_eq!(Report::balanced().defect_count(), 0);
    }

    #[test]
    fn test_aborted_display() {
        let report = Report {
            mismatches: vec![],
            outcome: Outcome::Aborted {
                tag: "div".to_string(),
                line: 1,
            },
        };
        assert_eq!(
            report.to_string(),
            "Error: Unexpected closing tag <div> at line 1\n"
        );
        assert!(report.is_aborted());
        assert_eq!(report.defect_count(), 1);
    }

    #[test]
    fn test_unclosed_display() {
        let report = Report {
            mismatches: vec![],
            outcome: Outcome::Unclosed {
                tags: vec![OpenTagFrame::new("p", 2), OpenTagFrame::new("div", 1)],
            },
        };
        assert_eq!(
            report.to_string(),
            "Unclosed tags at EOF:\np at line 2\ndiv at line 1\n"
        );
        assert_eq!(report.unclosed().len(), 2);
        assert_eq!(report.defect_count(), 2);
    }

    #[test]
    fn test_mismatches_precede_outcome() {
        let report = Report {
            mismatches: vec![Mismatch {
                found: "a".to_string(),
                line: 3,
                expected: "b".to_string(),
                expected_line: 2,
            }],
            outcome: Outcome::Balanced,
        };
        assert_eq!(
            report.to_string(),
            "Error: Mismatch closing <a> at line 3. Expected <b> from line 2\nStructure seems balanced.\n"
        );
        assert!(!report.is_clean());
    }
}
