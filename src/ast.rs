//! Shape helpers for the tagged-node parse tree document.
//!
//! A well-formed node is a JSON object with exactly one key, the
//! discriminant naming the node's syntactic type. Its value is an object
//! that carries a `location` and, for internal nodes, a `content` array of
//! child nodes. Anything else is degraded to the `"Unknown"` type with a
//! zero location instead of being rejected.

use serde::Deserialize;
use serde_json::Value;

/// Type name assigned to nodes that do not match the single-key shape.
pub const UNKNOWN_KIND: &str = "Unknown";

/// Byte range of a node within the original UTF-8 source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Location {
    pub start: usize,
    pub end: usize,
}

/// Extract the node's type name from its discriminant key.
pub fn node_kind(node: &Value) -> &str {
    match node.as_object() {
        Some(map) if map.len() == 1 => map.keys().next().map_or(UNKNOWN_KIND, String::as_str),
        _ => UNKNOWN_KIND,
    }
}

/// The record that holds `location` and `content`. For the single-key
/// shape this is the discriminant's value; for other objects the object
/// itself is searched.
fn node_body(node: &Value) -> Option<&Value> {
    let map = node.as_object()?;
    if map.len() == 1 {
        map.values().next()
    } else {
        Some(node)
    }
}

/// Extract the node's byte range, `(0, 0)` when absent or malformed.
pub fn node_location(node: &Value) -> Location {
    node_body(node)
        .and_then(|body| body.get("location"))
        .and_then(|loc| Location::deserialize(loc).ok())
        .unwrap_or_default()
}

/// The node's `content` sequence, `Some` only when it is a non-empty array.
pub fn node_children(node: &Value) -> Option<&[Value]> {
    let children = node_body(node)?.get("content")?.as_array()?;
    if children.is_empty() {
        None
    } else {
        Some(children)
    }
}
