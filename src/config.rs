//! Configuration loader
//!
//! `defaults/deptree.default.toml` is embedded into the crate so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files and
//! single-key overrides on top of those defaults via [`Loader`] before
//! deserializing into [`DeptreeConfig`].

use crate::formats::FormatParams;
use crate::parsing::ParserOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/deptree.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DeptreeConfig {
    pub parser: ParserOptions,
    pub output: OutputConfig,
}

/// How parsed trees are written out
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Registered format name
    pub format: String,
    pub pretty: bool,
    pub annotate: bool,
}

impl OutputConfig {
    /// The formatter parameters these settings stand for
    pub fn params(&self) -> FormatParams {
        let mut params = FormatParams::new();
        params.insert("pretty".to_string(), self.pretty.to_string());
        params.insert("annotate".to_string(), self.annotate.to_string());
        params
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and check the layout knobs.
    pub fn build(self) -> Result<DeptreeConfig, ConfigError> {
        let config: DeptreeConfig = self.builder.build()?.try_deserialize()?;
        if config.parser.indent_width == 0 {
            return Err(ConfigError::Message(
                "parser.indent_width must be at least 1".to_string(),
            ));
        }
        if config.parser.marker.is_empty() {
            return Err(ConfigError::Message(
                "parser.marker must not be empty".to_string(),
            ));
        }
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DeptreeConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_parser_options() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parser, ParserOptions::default());
        assert_eq!(config.output.format, "arcs");
        assert!(config.output.pretty);
        assert!(!config.output.annotate);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parser.strict_depth", false)
            .expect("override to apply")
            .set_override("output.format", "treeviz")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(!config.parser.strict_depth);
        assert_eq!(config.output.format, "treeviz");
    }

    #[test]
    fn layers_files() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[parser]\nindent_width = 2\nmargin = 0").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.parser.indent_width, 2);
        assert_eq!(config.parser.margin, 0);
        assert_eq!(config.parser.marker, "+--");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/deptree.toml")
            .build()
            .unwrap();
        assert_eq!(config.parser.indent_width, 4);
    }

    #[test]
    fn rejects_zero_indent() {
        let result = Loader::new()
            .set_override("parser.indent_width", 0)
            .unwrap()
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn output_params() {
        let params = load_defaults().unwrap().output.params();
        assert_eq!(params.get("pretty").map(String::as_str), Some("true"));
        assert_eq!(params.get("annotate").map(String::as_str), Some("false"));
    }
}
