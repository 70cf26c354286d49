//! Input loading for the visualizer.
//!
//! Produces the two root inputs of the pipeline: the parse-tree document
//! and the original source text. Loading is the only fatal phase; a
//! structurally odd node inside an otherwise valid document is not an
//! error here and is handled by the walker.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path}: expected a top-level array of parse nodes")]
    NotAnArray { path: PathBuf },
}

/// The loaded parse tree roots plus the source text they refer to.
#[derive(Debug)]
pub struct Inputs {
    pub roots: Vec<Value>,
    pub source_text: String,
}

impl Inputs {
    /// Byte view of the source, used for offset slicing.
    pub fn source_bytes(&self) -> &[u8] {
        self.source_text.as_bytes()
    }
}

/// Read and decode both input files.
pub fn load(tree_path: &Path, source_path: &Path) -> Result<Inputs, LoadError> {
    let tree_text = read(tree_path)?;
    let document: Value = serde_json::from_str(&tree_text).map_err(|source| LoadError::Parse {
        path: tree_path.to_path_buf(),
        source,
    })?;
    let roots = match document {
        Value::Array(items) => items,
        _ => {
            return Err(LoadError::NotAnArray {
                path: tree_path.to_path_buf(),
            });
        }
    };

    let source_text = read(source_path)?;
    debug!(
        "loaded {} root nodes, {} source bytes",
        roots.len(),
        source_text.len()
    );

    Ok(Inputs { roots, source_text })
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}
