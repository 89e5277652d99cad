//! Main module for nestcheck library functionality

pub mod checker;
pub mod config;
pub mod error;
pub mod formats;
pub mod loader;
pub mod report;
pub mod tag;

pub use checker::{NestingChecker, DEFAULT_VOID_ELEMENTS};
pub use error::NestcheckError;
pub use loader::{check_input, read_lines};
pub use report::{Mismatch, OpenTagFrame, Outcome, Report};
pub use tag::{split_lines, tokenize_line, TagKind, TagToken};
