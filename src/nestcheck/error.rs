//! Errors that stop a run
//!
//! Nesting defects are never errors; they are part of the [`Report`](crate::nestcheck::report::Report).

use crate::nestcheck::formats::FormatError;
use config::ConfigError;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum NestcheckError {
    /// The input could not be read
    Io { path: PathBuf, source: io::Error },
    Config(ConfigError),
    Format(FormatError),
}

impl fmt::Display for NestcheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NestcheckError::Io { path, source } => {
                write!(f, "Cannot read '{}': {}", path.display(), source)
            }
            NestcheckError::Config(e) => write!(f, "Configuration error: {}", e),
            NestcheckError::Format(e) => write!(f, "Format error: {}", e),
        }
    }
}

impl std::error::Error for NestcheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NestcheckError::Io { source, .. } => Some(source),
            NestcheckError::Config(e) => Some(e),
            NestcheckError::Format(e) => Some(e),
        }
    }
}

impl From<ConfigError> for NestcheckError {
    fn from(err: ConfigError) -> Self {
        NestcheckError::Config(err)
    }
}

impl From<FormatError> for NestcheckError {
    fn from(err: FormatError) -> Self {
        NestcheckError::Format(err)
    }
}
