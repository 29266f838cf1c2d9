//! Arc-diagram output, as JSON (displaCy's layout) or YAML

use super::registry::{flag, FormatError, FormatParams, Formatter};
use crate::arcs::to_arc_diagram;
use crate::tree::Tree;

/// `{"words": [...], "arcs": [...]}`; `pretty=false` gives a single line
pub struct ArcsJsonFormatter;

impl Formatter for ArcsJsonFormatter {
    fn name(&self) -> &str {
        "arcs"
    }

    fn serialize_with_params(
        &self,
        tree: &Tree,
        params: &FormatParams,
    ) -> Result<String, FormatError> {
        let diagram = to_arc_diagram(tree)?;
        let json = if flag(params, "pretty", true) {
            serde_json::to_string_pretty(&diagram)
        } else {
            serde_json::to_string(&diagram)
        };
        json.map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Arc diagram JSON: words in sentence order plus one arc per dependency"
    }
}

pub struct ArcsYamlFormatter;

impl Formatter for ArcsYamlFormatter {
    fn name(&self) -> &str {
        "arcs-yaml"
    }

    fn serialize_with_params(
        &self,
        tree: &Tree,
        _params: &FormatParams,
    ) -> Result<String, FormatError> {
        let diagram = to_arc_diagram(tree)?;
        serde_yaml::to_string(&diagram).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Arc diagram as YAML"
    }
}
