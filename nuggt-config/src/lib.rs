//! Shared configuration loader for the nuggt toolchain.
//!
//! `defaults/nuggt.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. Applications layer user files on top of those defaults via [`Loader`]
//! before deserializing into [`NuggtConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use nuggt_parser::{ParseOptions, SerializeOptions};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/nuggt.default.toml");

/// Top-level configuration consumed by nuggt applications.
#[derive(Debug, Clone, Deserialize)]
pub struct NuggtConfig {
    pub parsing: ParsingConfig,
    pub serializing: SerializingConfig,
    pub output: OutputConfig,
}

/// Mirrors [`ParseOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    pub groupable_kinds: Vec<String>,
}

/// Mirrors [`SerializeOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct SerializingConfig {
    pub trailing_newline: bool,
}

/// CLI presentation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub default_format: String,
    pub log_level: String,
}

impl NuggtConfig {
    pub fn to_parse_options(&self) -> ParseOptions {
        ParseOptions::default().with_groupable_kinds(&self.parsing.groupable_kinds)
    }

    pub fn to_serialize_options(&self) -> SerializeOptions {
        SerializeOptions {
            trailing_newline: self.serializing.trailing_newline,
        }
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

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. from a command line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<NuggtConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NuggtConfig, ConfigError> {
    Loader::new().build()
}
