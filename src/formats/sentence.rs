//! Plain sentence output

use super::registry::{FormatError, FormatParams, Formatter};
use crate::tree::Tree;

/// The words in sentence order, separated by single spaces
pub struct SentenceFormatter;

impl Formatter for SentenceFormatter {
    fn name(&self) -> &str {
        "sentence"
    }

    fn serialize_with_params(
        &self,
        tree: &Tree,
        _params: &FormatParams,
    ) -> Result<String, FormatError> {
        Ok(tree.to_sentence()?)
    }

    fn description(&self) -> &str {
        "The sentence reassembled from the tree"
    }
}
