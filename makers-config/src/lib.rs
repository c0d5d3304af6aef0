//! Shared configuration loader for makers-markdown.
//!
//! `defaults/makers.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. Callers layer
//! user-specific files on top of those defaults via [`Loader`] before
//! deserializing into [`MakersConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/makers.default.toml");

/// Project-local configuration file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".makers-markdown.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MakersConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub makefile: PathBuf,
}

/// Where and how documents are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub merged_name: String,
    pub extension: String,
    pub merge: bool,
    pub split: bool,
}

impl OutputConfig {
    /// At least one output form must be requested.
    pub fn has_output(&self) -> bool {
        self.merge || self.split
    }
}

/// Settings that take precedence over every file. `None` leaves the layered
/// value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub makefile: Option<PathBuf>,
    pub outdir: Option<PathBuf>,
    pub merge: Option<bool>,
    pub split: Option<bool>,
}

/// Layers, lowest precedence first: embedded defaults, then files in the
/// order they were added, then [`Overrides`].
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Loader {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file that must exist, e.g. the one named by `--config`.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file if present, e.g. [`LOCAL_CONFIG_FILE`].
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Apply the command-line settings that were actually given.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        let paths = [
            ("input.makefile", &overrides.makefile),
            ("output.dir", &overrides.outdir),
        ];
        for (key, path) in paths {
            if let Some(path) = path {
                self = self.set_override(key, path.display().to_string())?;
            }
        }
        let flags = [("output.merge", overrides.merge), ("output.split", overrides.split)];
        for (key, flag) in flags {
            if let Some(flag) = flag {
                self = self.set_override(key, flag)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> Result<MakersConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MakersConfig, ConfigError> {
    Loader::new().build()
}
