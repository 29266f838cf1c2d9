//! Output formats
//!
//! Every format turns a parsed [`crate::tree::Tree`] into text and is looked
//! up by name through the [`FormatRegistry`]:
//!
//!     - `arcs`: arc diagram JSON
//!     - `arcs-yaml`: the same diagram as YAML
//!     - `treeviz`: the tree redrawn in the ASCII input layout
//!     - `sentence`: the words in sentence order

pub mod arcs;
pub mod registry;
pub mod sentence;
pub mod treeviz;

pub use registry::{FormatError, FormatParams, FormatRegistry, Formatter};
