//! Input loading
//!
//! Reads a file (or stdin for `-`) into lines and hands them to the checker.
//! This is the only place a run can fail: the scan itself accepts any text.

use crate::nestcheck::checker::NestingChecker;
use crate::nestcheck::error::NestcheckError;
use crate::nestcheck::report::Report;
use crate::nestcheck::tag::split_lines;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Read the whole input and split it into lines (`\r\n`, `\r` or `\n`).
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_lines(input: impl AsRef<Path>) -> Result<Vec<String>, NestcheckError> {
    let path = input.as_ref();
    let bytes = read_bytes(path).map_err(|source| NestcheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                "input is not valid UTF-8, replacing invalid sequences"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    let lines: Vec<String> = split_lines(&text).into_iter().map(str::to_owned).collect();
    tracing::debug!(path = %path.display(), lines = lines.len(), "read input");
    Ok(lines)
}

fn read_bytes(path: &Path) -> io::Result<Vec<u8>> {
    if path == Path::new(STDIN_PATH) {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(path)
    }
}

/// Read `input` and check its nesting
pub fn check_input(
    checker: &NestingChecker,
    input: impl AsRef<Path>,
) -> Result<Report, NestcheckError> {
    let lines = read_lines(input)?;
    Ok(checker.check(&lines))
}
