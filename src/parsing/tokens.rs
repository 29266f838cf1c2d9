//! Field extraction: `<word> <tag> <role> @<order>`

use crate::error::LineDefect;
use crate::tree::NodeData;
use once_cell::sync::Lazy;
use regex::Regex;

static ORDER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@([0-9]+)$").expect("order token pattern is valid"));

/// Split trimmed text on single spaces into exactly four fields.
///
/// Consecutive spaces yield empty fields and are rejected through the
/// token count. The 1-based `@order` becomes a zero-based order.
pub fn parse_fields(text: &str) -> Result<NodeData, LineDefect> {
    let tokens: Vec<&str> = text.trim().split(' ').collect();
    let [word, tag, role, order] = tokens.as_slice() else {
        return Err(LineDefect::TokenCount {
            found: tokens.len(),
        });
    };
    Ok(NodeData::new(*word, *tag, *role, parse_order(order)?))
}

fn parse_order(token: &str) -> Result<usize, LineDefect> {
    if !token.starts_with('@') {
        return Err(LineDefect::MissingOrderSigil {
            token: token.to_string(),
        });
    }
    let one_based: usize = ORDER_TOKEN
        .captures(token)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| LineDefect::NonNumericOrder {
            token: token.to_string(),
        })?;
    one_based.checked_sub(1).ok_or(LineDefect::ZeroOrder)
}
