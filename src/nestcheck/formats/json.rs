//! JSON report
//!
//! ```text
//! {
//!   "mismatches": [{ "found": "a", "line": 3, "expected": "b", "expected_line": 2 }],
//!   "outcome": { "status": "unclosed", "tags": [{ "name": "div", "line": 1 }] }
//! }
//! ```

use super::registry::{FormatError, ReportFormatter};
use crate::nestcheck::report::Report;

pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, report: &Report) -> Result<String, FormatError> {
        let mut out = serde_json::to_string_pretty(report)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON object with mismatches and outcome"
    }
}
