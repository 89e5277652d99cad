//! Report output formats
//!
//! - text: the canonical line-oriented report
//! - json: machine-readable report for editor and CI integrations

pub mod json;
pub mod registry;
pub mod text;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, ReportFormatter};
pub use text::TextFormatter;
