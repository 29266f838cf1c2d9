//! Format registry for tree serialization
//!
//! This module provides a pluggable registry system for output formats.
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use crate::error::InvariantViolation;
use crate::tree::Tree;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The tree cannot be laid out in sentence order
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Free-form `key=value` knobs passed to a formatter
pub type FormatParams = HashMap<String, String>;

/// Trait for tree formatters
///
/// Implementors provide a way to serialize a Tree to a string representation.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "arcs", "treeviz")
    fn name(&self) -> &str;

    /// Serialize a tree to this format
    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        self.serialize_with_params(tree, &FormatParams::new())
    }

    /// Serialize with formatter-specific parameters; unknown keys are ignored
    fn serialize_with_params(&self, tree: &Tree, params: &FormatParams)
        -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Read a boolean parameter, anything but `"false"` counts as set
pub(crate) fn flag(params: &FormatParams, key: &str, default: bool) -> bool {
    params.get(key).map(|v| v != "false").unwrap_or(default)
}

/// Registry of tree formatters
///
/// Provides a centralized registry for all available serialization formats.
/// Formats can be registered and retrieved by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.formatters
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn serialize(
        &self,
        tree: &Tree,
        format: &str,
        params: &FormatParams,
    ) -> Result<String, FormatError> {
        self.get(format)?.serialize_with_params(tree, params)
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::arcs::ArcsJsonFormatter);
        registry.register(super::arcs::ArcsYamlFormatter);
        registry.register(super::treeviz::TreevizFormatter::default());
        registry.register(super::sentence::SentenceFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
