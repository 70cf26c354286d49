//! Parse tree traversal.
//!
//! Walks the node document in pre-order and produces, for every node, one
//! [`DisplayRecord`] in an arena-backed [`DisplayTree`], plus a flat
//! [`Highlight`] list across the whole tree. Anomalies never abort the
//! walk; they degrade to the `"Unknown"` type or a diagnostic preview.

use itertools::Itertools;
use log::debug;
use serde_json::Value;

use crate::ast::{self, Location};
use crate::render::escape_html;

/// Palette of the classic viewer, cycled by node depth.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#feca57", "#ff9ff3", "#54a0ff", "#5f27cd",
];

/// Maximum preview length in characters, before the `...` ellipsis.
pub const PREVIEW_MAX_CHARS: usize = 50;

/// Index of a record inside its [`DisplayTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordRef(u32);

impl RecordRef {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// The renderer-facing projection of one parse tree node.
#[derive(Debug, Clone)]
pub struct DisplayRecord {
    /// Discriminant key of the node, or `"Unknown"`.
    pub kind: String,
    /// Byte range in the original source.
    pub start: usize,
    pub end: usize,
    /// Nesting depth, root nodes at 0.
    pub depth: usize,
    /// DOM id, `"node_"` plus the sibling-index path from the root joined
    /// by `_`. Unique across the whole tree, so every node keeps its own
    /// collapse state.
    pub id: String,
    /// Truncated, HTML-escaped preview of the source the node spans.
    pub preview: String,
    /// Child records, in original sibling order.
    pub children: Vec<RecordRef>,
}

impl DisplayRecord {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Source range of one node with its depth-derived color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
    pub kind: String,
    pub depth: usize,
    pub color: String,
}

/// All display records of one walk, in pre-order, plus the highlight list.
#[derive(Debug, Default)]
pub struct DisplayTree {
    records: Vec<DisplayRecord>,
    roots: Vec<RecordRef>,
    highlights: Vec<Highlight>,
}

impl DisplayTree {
    pub fn get(&self, record_ref: RecordRef) -> &DisplayRecord {
        &self.records[record_ref.index()]
    }

    /// Root-level records, in document order.
    pub fn roots(&self) -> &[RecordRef] {
        &self.roots
    }

    /// Every record, in pre-order emission order.
    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    /// Highlight records sorted by (start ascending, depth descending).
    /// Computed for every node; the HTML renderer does not consume these,
    /// they are kept for an inline-highlighted source view.
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

struct Frame<'v> {
    node: &'v Value,
    depth: usize,
    parent: Option<RecordRef>,
    path: Vec<usize>,
}

/// Walk the root sequence and build the display tree.
///
/// The traversal uses an explicit work stack so arbitrarily deep documents
/// cannot overflow the call stack, while still emitting records in
/// pre-order.
pub fn walk(roots: &[Value], source_bytes: &[u8], palette: &[&str]) -> DisplayTree {
    let palette = if palette.is_empty() {
        &DEFAULT_PALETTE[..]
    } else {
        palette
    };

    let mut tree = DisplayTree::default();
    let mut stack: Vec<Frame> = roots
        .iter()
        .enumerate()
        .rev()
        .map(|(i, node)| Frame {
            node,
            depth: 0,
            parent: None,
            path: vec![i],
        })
        .collect();

    while let Some(frame) = stack.pop() {
        let kind = ast::node_kind(frame.node);
        let location = ast::node_location(frame.node);

        let record_ref = RecordRef(tree.records.len() as u32);
        tree.records.push(DisplayRecord {
            kind: kind.to_string(),
            start: location.start,
            end: location.end,
            depth: frame.depth,
            id: format!("node_{}", frame.path.iter().join("_")),
            preview: content_preview(source_bytes, location),
            children: Vec::new(),
        });
        match frame.parent {
            Some(parent) => tree.records[parent.index()].children.push(record_ref),
            None => tree.roots.push(record_ref),
        }

        tree.highlights.push(Highlight {
            start: location.start,
            end: location.end,
            kind: kind.to_string(),
            depth: frame.depth,
            color: palette[frame.depth % palette.len()].to_string(),
        });

        if let Some(children) = ast::node_children(frame.node) {
            for (i, child) in children.iter().enumerate().rev() {
                let mut path = frame.path.clone();
                path.push(i);
                stack.push(Frame {
                    node: child,
                    depth: frame.depth + 1,
                    parent: Some(record_ref),
                    path,
                });
            }
        }
    }

    tree.highlights
        .sort_by(|a, b| a.start.cmp(&b.start).then(b.depth.cmp(&a.depth)));

    debug!(
        "walked {} records ({} roots)",
        tree.records.len(),
        tree.roots.len()
    );
    tree
}

/// Preview of the source text a node spans: sliced by byte range,
/// truncated, newlines made visible, HTML-escaped. A range that cannot be
/// sliced or decoded yields a diagnostic string instead of aborting.
fn content_preview(source_bytes: &[u8], location: Location) -> String {
    if location.start == 0 && location.end == 0 {
        return String::new();
    }

    let text = match source_bytes
        .get(location.start..location.end)
        .map(std::str::from_utf8)
    {
        Some(Ok(text)) => text,
        _ => return format!("[Error: byte range {}~{}]", location.start, location.end),
    };

    let mut preview: String = text.chars().take(PREVIEW_MAX_CHARS).collect();
    if preview.len() < text.len() {
        preview.push_str("...");
    }

    escape_html(&preview.replace('\n', "\\n"))
}
