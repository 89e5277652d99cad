//! # nestcheck
//!
//! Checks that markup-like tags (HTML, JSX/TSX) in a source file are properly
//! nested and closed.
//!
//! ```rust,ignore
//! use nestcheck::nestcheck::NestingChecker;
//!
//! let report = NestingChecker::new().check(["<div>", "<p>"]);
//! print!("{report}");
//! // Unclosed tags at EOF:
//! // p at line 2
//! // div at line 1
//! ```

pub mod nestcheck;
