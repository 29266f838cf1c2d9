//! Depth from marker column
//!
//! The upstream renderer draws one indent unit per level after a fixed
//! margin, so with the default layout:
//!
//!     brought VBD ROOT @2              depth 0
//!      +-- pizza NN dobj @4            marker at column 1 -> depth 1
//!      |   +-- the DT det @3           marker at column 5 -> depth 2
//!
//! depth = (column - margin) / indent_width + 1, with integer division.

use super::options::ParserOptions;
use crate::error::LineDefect;

/// Depth of a child line whose marker starts at `column`
pub fn depth_for_column(column: usize, options: &ParserOptions) -> Result<usize, LineDefect> {
    let offset = column
        .checked_sub(options.margin)
        .ok_or(LineDefect::MarkerInMargin)?;
    Ok(offset / options.indent_width.max(1) + 1)
}
