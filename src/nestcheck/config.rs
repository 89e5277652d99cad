//! Configuration loading
//!
//! `defaults/nestcheck.default.toml` is embedded into the binary so that docs
//! and runtime behavior stay in sync. User files and CLI values are layered on
//! top via [`Loader`] before deserializing into [`NestcheckConfig`].

use crate::nestcheck::checker::NestingChecker;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/nestcheck.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NestcheckConfig {
    pub checker: CheckerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckerConfig {
    /// Tags that never need a closing counterpart
    pub void_elements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered report format
    pub format: String,
    /// Treat reported defects as a failing run
    pub strict: bool,
}

impl NestcheckConfig {
    /// Append names to the configured void element list
    pub fn add_void_elements<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.checker
            .void_elements
            .extend(names.into_iter().map(Into::into));
    }

    /// Build a checker from the configured void element list
    pub fn checker(&self) -> NestingChecker {
        NestingChecker::with_void_elements(&self.checker.void_elements)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<NestcheckConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NestcheckConfig, ConfigError> {
    Loader::new().build()
}
