use std::path::PathBuf;

use thiserror::Error;

use crate::loader::LoadError;

/// Errors that abort a visualization run.
///
/// Only input loading and the final output write are fatal; anomalies
/// found while walking the tree degrade to placeholder output instead of
/// surfacing here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Load(#[from] LoadError),
    #[error("failed to format document: {0}")]
    Render(#[from] std::fmt::Error),
    #[error("failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
