//! Canonical text report

use super::registry::{FormatError, ReportFormatter};
use crate::nestcheck::report::Report;

/// Renders the report exactly as its `Display` impl does
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn render(&self, report: &Report) -> Result<String, FormatError> {
        Ok(report.to_string())
    }

    fn description(&self) -> &str {
        "Human-readable report, one finding per line"
    }
}
