//! An interactive HTML visualizer for parse trees.
//!
//! Takes a parse-tree document (a JSON array of tagged nodes carrying byte
//! offsets into the original source) plus the source text itself, and
//! renders one self-contained HTML page with the full text and a
//! collapsible tree view of the nodes.

/// Shape helpers for the tagged-node document.
pub mod ast;
/// CLI parsing and configuration.
pub mod cli;
/// Contains the error types for the application.
pub mod error;
/// Input loading.
pub mod loader;
/// Byte-offset to character-offset conversion.
pub mod offset;
/// HTML document generation.
pub mod render;
/// Pipeline orchestration.
pub mod visualizer;
/// Parse tree traversal.
pub mod walker;
